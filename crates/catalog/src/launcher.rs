use std::io;

/// Opens a download location outside of the terminal.
pub trait Launcher: Send + Sync {
	fn open(&self, target: &str) -> io::Result<()>;
}

/// Hands targets to the platform's default handler (usually the browser).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
	fn open(&self, target: &str) -> io::Result<()> {
		open::that_detached(target)
	}
}
