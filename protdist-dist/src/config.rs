use protdist_core::models::AbundanceTransform;

use crate::bins::BinSchema;
use crate::consts::{DEFAULT_SCALE, OTHER_LABEL};

/// Static settings of a distribution run.
#[derive(Debug, Clone, PartialEq)]
pub struct DistConfig {
    pub mw_bins: BinSchema,
    pub pi_bins: BinSchema,
    pub transform: AbundanceTransform,
    /// Factor applied to normalized values when reporting
    pub scale: f64,
    /// Function label reported after all others
    pub other_label: String,
}

impl DistConfig {
    pub fn new(
        mw_bins: BinSchema,
        pi_bins: BinSchema,
        transform: AbundanceTransform,
        scale: f64,
        other_label: &str,
    ) -> DistConfig {
        DistConfig {
            mw_bins,
            pi_bins,
            transform,
            scale,
            other_label: other_label.to_string(),
        }
    }

    pub fn with_transform(mut self, transform: AbundanceTransform) -> DistConfig {
        self.transform = transform;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> DistConfig {
        self.scale = scale;
        self
    }

    pub fn with_other_label(mut self, other_label: &str) -> DistConfig {
        self.other_label = other_label.to_string();
        self
    }
}

impl Default for DistConfig {
    ///
    /// The standard configuration: kDa and pH bins from [crate::consts],
    /// log2 abundances, percentages, and `other` as the catch-all function.
    ///
    fn default() -> Self {
        DistConfig::new(
            BinSchema::molecular_weight(),
            BinSchema::isoelectric_point(),
            AbundanceTransform::default(),
            DEFAULT_SCALE,
            OTHER_LABEL,
        )
    }
}
