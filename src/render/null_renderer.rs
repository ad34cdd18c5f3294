use crate::error::DashboardResult;
use crate::render::{DashboardFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so callers catch inconsistent frames
/// before a real drawing surface is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_frame: Option<DashboardFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &DashboardFrame) -> DashboardResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
