pub mod batch;
pub mod camera;
pub mod error;
pub mod gpu_context;
pub mod mesh_buffers;
pub mod shape_pipeline;
pub mod vertex;

pub use batch::ShapeBatch;
pub use camera::{CameraUniform, ScreenCamera};
pub use error::GpuInitError;
pub use gpu_context::GpuContext;
pub use mesh_buffers::MeshBuffers;
pub use shape_pipeline::ShapePipeline;
pub use vertex::ShapeVertex;
