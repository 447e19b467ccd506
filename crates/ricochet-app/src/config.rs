use ricochet_engine::coords::ColorRgba;
use ricochet_engine::device::GpuInit;
use ricochet_engine::geometry::Vertex;
use ricochet_engine::logging::LoggingConfig;
use ricochet_engine::motion::MotionConfig;
use ricochet_engine::window::RuntimeConfig;

/// Everything the binary needs to start the animation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Initial polygon in NDC, in draw order.
    pub vertices: Vec<Vertex>,
    pub motion: MotionConfig,
    /// Color for vertices that carry none.
    pub fill: ColorRgba,
    pub clear: ColorRgba,
    pub runtime: RuntimeConfig,
    pub gpu: GpuInit,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// The reference triangle, centered on the origin.
    pub fn reference_triangle() -> Vec<Vertex> {
        vec![
            Vertex::new(-0.1, -0.1),
            Vertex::new(0.1, -0.1),
            Vertex::new(0.0, 0.1),
        ]
    }

}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            vertices: Self::reference_triangle(),
            motion: MotionConfig::default(),
            fill: ColorRgba::purple(),
            clear: ColorRgba::black(),
            runtime: RuntimeConfig::default(),
            gpu: GpuInit::default(),
            logging: LoggingConfig::default(),
        }
    }
}
