use crate::geometry::Vertex;

/// Consumer of the per-tick vertex sequence (typically a GPU vertex buffer).
///
/// Called exactly once per tick with the fully transformed vertices. An error
/// is fatal for the loop driving the engine; there is no partial-upload
/// recovery.
pub trait VertexSink {
    fn upload(&mut self, vertices: &[Vertex]) -> anyhow::Result<()>;
}

impl<S: VertexSink + ?Sized> VertexSink for &mut S {
    fn upload(&mut self, vertices: &[Vertex]) -> anyhow::Result<()> {
        (**self).upload(vertices)
    }
}

/// "Stop after this tick" request from the window/input surface.
pub trait StopSignal {
    fn should_stop(&mut self) -> bool;
}

impl<F: FnMut() -> bool> StopSignal for F {
    fn should_stop(&mut self) -> bool {
        self()
    }
}

/// Stops after a fixed number of polls have returned `false`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TickLimit {
    remaining: u64,
}

impl TickLimit {
    #[inline]
    pub const fn new(ticks: u64) -> Self {
        Self { remaining: ticks }
    }

    #[inline]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl StopSignal for TickLimit {
    fn should_stop(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }
}
