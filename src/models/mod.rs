pub mod analysis;
pub mod frame_set;
pub mod gap;

pub use analysis::AnalysisResult;
pub use frame_set::FrameSet;
pub use gap::GapRange;
