use std::ffi::CString;

use color_eyre::eyre::{eyre, Result};
use glutin::config::{ColorBufferType, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version};
use glutin::display::{Display, DisplayFeatures, GetGlDisplay};
use glutin::prelude::*;
use glutin::surface::{Surface, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasRawWindowHandle;
use tracing::{debug, info};
use winit::dpi::PhysicalSize;
use winit::event_loop::EventLoopWindowTarget;
use winit::window::{Window, WindowBuilder};

/// A current, hardware accelerated GL context bound to an invisible
/// 1x1 window. Owns every platform handle it acquired so teardown is
/// a plain reverse-order drop.
pub struct ProbeContext {
    gl: glow::Context,
    context: PossiblyCurrentContext,
    surface: Surface<WindowSurface>,
    window: Window,
    display: Display,
}

impl ProbeContext {
    pub fn create(event_loop: &EventLoopWindowTarget<()>) -> Result<Self> {
        let window_builder = WindowBuilder::new()
            .with_title("glcaps")
            .with_visible(false)
            .with_inner_size(PhysicalSize::new(1u32, 1u32));
        let template = ConfigTemplateBuilder::new()
            .with_buffer_type(ColorBufferType::Rgb { r_size: 8, g_size: 8, b_size: 8 })
            .with_alpha_size(8)
            .with_depth_size(0)
            .with_stencil_size(0)
            .with_single_buffering(false);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));

        let (window, gl_config) = display_builder
            .build(event_loop, template, |configs| {
                configs
                    .reduce(|acc, cfg| {
                        if cfg.hardware_accelerated() && !acc.hardware_accelerated() {
                            cfg
                        } else {
                            acc
                        }
                    })
                    .unwrap()
            })
            .map_err(|e| eyre!("could not find a usable GL config: {e}"))?;

        if !gl_config.hardware_accelerated() {
            return Err(eyre!("driver offered no hardware accelerated config"));
        }
        debug!("picked a config with {} samples", gl_config.num_samples());

        let window = window.ok_or_else(|| eyre!("display builder produced no window"))?;
        let raw_window_handle = window.raw_window_handle();
        let gl_display = gl_config.display();

        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(raw_window_handle));
        // GLES-only drivers reject a desktop GL request; retry unversioned.
        let fallback_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(None))
            .build(Some(raw_window_handle));
        let not_current_gl_context =
            match unsafe { gl_display.create_context(&gl_config, &context_attributes) } {
                Ok(context) => context,
                Err(_) => {
                    info!("core profile 3.3 rejected, falling back to GLES");
                    unsafe { gl_display.create_context(&gl_config, &fallback_attributes)? }
                }
            };

        let attrs = window.build_surface_attributes(Default::default());
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &attrs)? };
        let context = not_current_gl_context.make_current(&surface)?;

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                let s = CString::new(s).expect("failed to construct C string for gl proc address");
                gl_display.get_proc_address(&s)
            })
        };

        Ok(Self { gl, context, surface, window, display: gl_display })
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Names of the windowing-layer features the display supports,
    /// one token per supported flag.
    pub fn display_features(&self) -> Vec<String> {
        const FLAGS: &[(DisplayFeatures, &str)] = &[
            (DisplayFeatures::FLOAT_PIXEL_FORMAT, "FLOAT_PIXEL_FORMAT"),
            (DisplayFeatures::SRGB_FRAMEBUFFERS, "SRGB_FRAMEBUFFERS"),
            (DisplayFeatures::CREATE_ES_CONTEXT, "CREATE_ES_CONTEXT"),
            (DisplayFeatures::MULTISAMPLING_PIXEL_FORMATS, "MULTISAMPLING_PIXEL_FORMATS"),
            (DisplayFeatures::SWAP_CONTROL, "SWAP_CONTROL"),
            (DisplayFeatures::CONTEXT_ROBUSTNESS, "CONTEXT_ROBUSTNESS"),
            (DisplayFeatures::CONTEXT_NO_ERROR, "CONTEXT_NO_ERROR"),
            (DisplayFeatures::CONTEXT_RELEASE_BEHAVIOR, "CONTEXT_RELEASE_BEHAVIOR"),
        ];

        let supported = self.display.supported_features();
        FLAGS
            .iter()
            .filter(|(flag, _)| supported.contains(*flag))
            .map(|(_, name)| (*name).to_owned())
            .collect()
    }

    /// Unbinds the context from the thread and releases everything in
    /// reverse-acquisition order.
    pub fn dissolve(self) -> Result<()> {
        let Self { gl, context, surface, window, display: _ } = self;
        drop(gl);
        let not_current = context.make_not_current()?;
        drop(surface);
        drop(not_current);
        drop(window);
        Ok(())
    }
}
