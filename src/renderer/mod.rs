//! Rendering module
//!
//! Scene geometry is built on the CPU as colored triangles (`scene`, `shapes`,
//! `font`) and drawn by a single wgpu pipeline (`pipeline`).

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

use std::sync::Arc;

use rand_pcg::Pcg32;
use thiserror::Error;
use winit::window::Window;

pub use pipeline::RenderState;
pub use scene::SceneBuilder;
pub use vertex::Vertex;

use crate::assets::BucketIcon;
use crate::game::Renderer;
use crate::settings::Settings;
use crate::sim::{GameState, seeded_rng};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

/// Window renderer: scene builder plus GPU state
pub struct GpuRenderer {
    scene: SceneBuilder<Pcg32>,
    gpu: RenderState,
}

impl GpuRenderer {
    pub async fn new(
        window: Arc<Window>,
        settings: &Settings,
        icon: BucketIcon,
        jitter_seed: u64,
    ) -> Result<Self, RenderError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let gpu = RenderState::new(surface, &adapter, size.width, size.height, settings.vsync)
            .await?;
        let jitter = settings.cloud_jitter.then(|| seeded_rng(jitter_seed));

        Ok(Self {
            scene: SceneBuilder::new(icon, jitter),
            gpu,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }
}

impl Renderer for GpuRenderer {
    fn draw_frame(&mut self, state: &GameState) {
        let vertices = self.scene.build(state);
        match self.gpu.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                self.gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}
