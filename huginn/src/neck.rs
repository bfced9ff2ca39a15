use serde::Serialize;
use strum::AsRefStr;

/// Gaze action issued after the body command of a cycle.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum NeckAction {
    /// Keep the ball in view at all times.
    FixateBall,
    /// Look at the ball when its position is uncertain, scan the field otherwise.
    ScanOrBallAware,
    /// Scan for passing options while intercepting the ball.
    OffensiveInterceptScan,
}
