use crate::core::geometry::BoundingBox;
use crate::core::models::model::Model;
use crate::core::models::molecule::Molecule;
use nalgebra::{Point2, Vector2};
use tracing::{debug, instrument};

/// Spacing used when a model has no bonds to derive one from.
const FALLBACK_SPACING: f64 = 1.0;

/// Repositions top-level molecules so their bounding boxes no longer
/// overlap.
///
/// Molecules are rigid bodies here: packing translates them whole and
/// never rotates or deforms them. Placement is a shelf layout (largest
/// footprint first, rows filled left to right) anchored at the original
/// overall bounding-box corner so the structure stays roughly where it
/// was. Ordering is deterministic (area descending, molecule id as the
/// tie-break).
#[derive(Debug, Clone, Default)]
pub struct Packer {
    /// Minimum separation between placed bounding boxes. `None` derives
    /// the spacing from the model's mean bond length.
    pub spacing: Option<f64>,
}

impl Packer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spacing(spacing: f64) -> Self {
        Self {
            spacing: Some(spacing),
        }
    }

    /// Packs the model's top-level molecules. Molecules without atoms are
    /// left untouched; a model with fewer than one placeable molecule is a
    /// no-op.
    #[instrument(skip_all)]
    pub fn pack(&self, model: &mut Model) {
        let spacing = self.spacing.unwrap_or_else(|| derive_spacing(model));

        let mut entries: Vec<(usize, BoundingBox, String)> = model
            .molecules
            .iter()
            .enumerate()
            .filter_map(|(index, molecule)| {
                molecule
                    .bounding_box()
                    .map(|bounds| (index, bounds, molecule.id.clone().unwrap_or_default()))
            })
            .collect();
        if entries.is_empty() {
            return;
        }

        let anchor = entries
            .iter()
            .map(|(_, bounds, _)| *bounds)
            .reduce(|a, b| a.union(&b))
            .map(|bounds| bounds.min)
            .expect("entries is non-empty");

        entries.sort_by(|a, b| {
            b.1.area()
                .partial_cmp(&a.1.area())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.2.cmp(&b.2))
        });

        let row_limit = row_width_limit(&entries, spacing);

        let mut cursor = anchor;
        let mut row_height = 0.0f64;
        for (index, bounds, _) in &entries {
            if cursor.x > anchor.x && cursor.x + bounds.width() > anchor.x + row_limit {
                cursor = Point2::new(anchor.x, cursor.y + row_height + spacing);
                row_height = 0.0;
            }
            let offset: Vector2<f64> = cursor - bounds.min;
            model.molecules[*index].translate(offset);
            cursor.x += bounds.width() + spacing;
            row_height = row_height.max(bounds.height());
        }

        debug!(
            molecules = entries.len(),
            spacing, "packed top-level molecules"
        );
    }
}

fn derive_spacing(model: &Model) -> f64 {
    let lengths: Vec<f64> = model
        .molecules
        .iter()
        .flat_map(Molecule::bond_lengths)
        .collect();
    if lengths.is_empty() {
        FALLBACK_SPACING
    } else {
        lengths.iter().sum::<f64>() / lengths.len() as f64
    }
}

/// Wide enough for the widest molecule, and roughly square overall.
fn row_width_limit(entries: &[(usize, BoundingBox, String)], spacing: f64) -> f64 {
    let widest = entries
        .iter()
        .map(|(_, bounds, _)| bounds.width())
        .fold(0.0f64, f64::max);
    let total_area: f64 = entries
        .iter()
        .map(|(_, bounds, _)| (bounds.width() + spacing) * (bounds.height() + spacing))
        .sum();
    widest.max(total_area.sqrt())
}
