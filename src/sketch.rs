use rand::prelude::*;
use vector_common::{vecmath, Vector2D};

use crate::config::SketchConfig;

/// A generated field of vectors plus the anchor points they are drawn from.
///
/// `vectors[i]` is the displacement anchored at `origins[i]`.
pub struct VectorField {
    pub origins: Vec<Vector2D>,
    pub vectors: Vec<Vector2D>,
}

impl VectorField {
    /// Generates the field described by `config`.
    ///
    /// The RNG is seeded from `config.field.seed`, so identical configs
    /// produce identical sketches.
    pub fn generate(config: &SketchConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.field.seed);
        let count = config.field.vector_count as usize;
        let centre = (config.field.max_x / 2.0, config.field.max_y / 2.0);

        let mut origins = Vec::with_capacity(count);
        let mut vectors = Vec::with_capacity(count);

        for _ in 0..count {
            let mut origin = Vector2D::default();
            origin.set_random(config.field.max_x, config.field.max_y, &mut rng);
            origins.push(origin);

            // Draw a raw displacement and recentre it so arrows point in
            // every direction, then run the configured transform chain.
            let mut v = Vector2D::default();
            v.set_random(config.field.max_x, config.field.max_y, &mut rng);
            v.subtract(&centre);

            let transform = &config.transform;
            if let Some(length) = transform.set_length {
                v.set_length(length);
            }
            if let Some(degrees) = transform.rotate_degrees {
                v.rotate(degrees);
            }
            if let Some(scalar) = transform.scale {
                v.scale(scalar);
            }
            vectors.push(v);
        }

        VectorField { origins, vectors }
    }

    /// Mean displacement across the field.
    pub fn mean_vector(&self) -> Vector2D {
        vecmath::average(self.vectors.iter())
    }

    /// Length of the longest displacement in the field.
    pub fn max_length(&self) -> f64 {
        self.vectors.iter().map(|v| v.length()).fold(0.0, f64::max)
    }

    /// Largest distance from any anchor to the anchor centroid. Compared
    /// in squared space, one square root at the end.
    pub fn origin_spread(&self) -> f64 {
        let centroid = vecmath::average(self.origins.iter());
        self.origins
            .iter()
            .map(|origin| vecmath::distance_between_sq(origin, &centroid))
            .fold(0.0, f64::max)
            .sqrt()
    }

    /// Mean alignment of each displacement with the mean displacement,
    /// from -1 (opposed) to 1 (parallel). NaN when the field mean is zero.
    pub fn coherence(&self) -> f64 {
        let mean_dir = vecmath::normalized(&self.mean_vector());
        let total: f64 = self
            .vectors
            .iter()
            .map(|v| vecmath::dot(&vecmath::normalized(v), &mean_dir))
            .sum();
        total / self.vectors.len() as f64
    }
}
