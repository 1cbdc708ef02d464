use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use freefly::app::App;
use freefly::cli::Cli;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(&cli);

    println!("freefly - Controls:");
    println!("  camera: WASD + Space/Shift, hold right mouse to look");
    println!("  object: arrows rotate, IJKL slide, E/Q scale, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
