//! Debug side channel for behaviors.
//!
//! Nothing written to a [`DebugClient`] influences the behavior of the agent.

use nalgebra::Point2;

pub trait DebugClient {
    fn add_message(&mut self, message: String);

    /// Mark the point the agent is currently moving to.
    fn set_target(&mut self, target: Point2<f32>);

    fn add_circle(&mut self, center: Point2<f32>, radius: f32);
}

/// [`DebugClient`] that keeps every annotation of the current cycle.
///
/// Annotations are traced as well, under the `huginn::debug_client` target.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DebugRecord {
    pub messages: Vec<String>,
    pub target: Option<Point2<f32>>,
    pub circles: Vec<(Point2<f32>, f32)>,
}

impl DebugClient for DebugRecord {
    fn add_message(&mut self, message: String) {
        tracing::debug!(target: "huginn::debug_client", "{message}");
        self.messages.push(message);
    }

    fn set_target(&mut self, target: Point2<f32>) {
        tracing::debug!(target: "huginn::debug_client", x = target.x, y = target.y, "target");
        self.target = Some(target);
    }

    fn add_circle(&mut self, center: Point2<f32>, radius: f32) {
        tracing::debug!(
            target: "huginn::debug_client",
            x = center.x,
            y = center.y,
            radius,
            "circle"
        );
        self.circles.push((center, radius));
    }
}
