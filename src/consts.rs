// Runtime parameters
pub const NUM_THREADS: usize = 1;
pub const CANVAS_WIDTH: usize = 1024;
pub const CANVAS_HEIGHT: usize = 768;
pub const FIELD_OF_VIEW: f64 = std::f64::consts::PI / 3.0;
pub const OUT_FILE: &'static str = "result.png";

// Floating point comparisons
pub const FEQ_EPSILON: f64 = 0.0001;

// Offset for secondary ray origins; keeps shadow and reflection rays from
// re-hitting the surface they start on
pub const SHADOW_BIAS: f64 = 1e-3;

// Maximum recursion depth for mirror reflection
pub const REFLECTION_RECURSION_DEPTH: u32 = 200;
