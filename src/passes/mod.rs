mod builder;
mod renderer;

pub use builder::GraphBuilderPass;
pub use renderer::DotRendererPass;
