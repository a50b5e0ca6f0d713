//! Wavefunction Explorer
//!
//! Interactive plot of infinite-well and harmonic-oscillator eigenstates
//! and their probability densities.
//!
//! Controls:
//! - 1/2: Infinite well / harmonic oscillator
//! - Up/Down (or +/-): Change quantum number
//! - E: Toggle equations sidebar
//! - Escape: Quit

use common::{EguiOverlay, GraphicsContext, GraphicsError};
use quantum_visualizer::{Explorer, ExplorerConfig};
use winit::{
    event::{Event, WindowEvent},
    event_loop::ControlFlow,
};

struct App {
    ctx: GraphicsContext,
    overlay: EguiOverlay,
    explorer: Explorer,
}

impl App {
    fn new(ctx: GraphicsContext, explorer: Explorer) -> Self {
        let overlay = EguiOverlay::new(&ctx);
        ctx.window.request_redraw();

        Self {
            ctx,
            overlay,
            explorer,
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.ctx.window.request_redraw();
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let explorer = &mut self.explorer;
        let full_output = self.overlay.run(&self.ctx.window, |ctx| explorer.ui(ctx));

        if full_output
            .viewport_output
            .values()
            .any(|viewport| viewport.repaint_delay.is_zero())
        {
            self.ctx.window.request_redraw();
        }

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let uploads = self
            .overlay
            .paint(&self.ctx, &mut encoder, &view, full_output);

        self.ctx
            .queue
            .submit(uploads.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();

        Ok(())
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), GraphicsError> {
    println!("Wavefunction Explorer");
    println!();
    println!("Controls:");
    println!("  1/2     - Infinite well / Harmonic oscillator");
    println!("  Up/Down - Change quantum number (also +/-)");
    println!("  E       - Toggle equations sidebar");
    println!("  Escape  - Quit");
    println!();

    let config = ExplorerConfig::from_env();
    log::info!(
        "Starting with {} n={} at {}x{}",
        config.potential,
        config.quantum_number,
        config.window_width,
        config.window_height
    );

    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        "Wavefunction Explorer",
        config.window_width,
        config.window_height,
    ))?;

    let mut app = App::new(ctx, Explorer::from_config(&config));

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Wait);

        let Event::WindowEvent { event, .. } = event else {
            return;
        };

        let response = app.overlay.on_window_event(&app.ctx.window, &event);
        if response.repaint {
            app.ctx.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => app.resize(size),
            // Shortcuts arrive through egui input and are applied in `Explorer::ui`
            WindowEvent::RedrawRequested => match app.render() {
                Ok(_) if app.explorer.quit_requested() => elwt.exit(),
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    app.resize(app.ctx.size)
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Surface out of memory, exiting");
                    elwt.exit()
                }
                Err(e) => log::warn!("Render error: {e:?}"),
            },
            _ => {}
        }
    })?;

    Ok(())
}
