use anyhow::{anyhow, Context, Result};
use arboard::Clipboard;
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};
use which::which;

/// Copies text to the system clipboard, native backend first, then CLI tools.
pub struct ClipboardService {
    native: Option<Clipboard>,
}

/// Which backend accepted the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopiedWith {
    Native,
    Tool(&'static str),
}

impl ClipboardService {
    pub fn new() -> Self {
        let native = match Clipboard::new() {
            Ok(cb) => Some(cb),
            Err(err) => {
                warn!(
                    "System clipboard backend unavailable ({}); falling back to clipboard tools",
                    err
                );
                None
            }
        };

        Self { native }
    }

    pub fn copy(&mut self, text: &str) -> Result<CopiedWith> {
        info!("Copying {} chars to clipboard", text.len());

        if let Some(clipboard) = self.native.as_mut() {
            match clipboard.set_text(text) {
                Ok(()) => return Ok(CopiedWith::Native),
                Err(err) => {
                    warn!("Native clipboard failed ({}), trying clipboard tools", err);
                    self.native = None;
                }
            }
        }

        copy_with_system_backends(text)
    }
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new()
    }
}

fn copy_with_system_backends(text: &str) -> Result<CopiedWith> {
    let mut last_error = None;

    for backend in CLIPBOARD_BACKENDS {
        if which(backend.copy_cmd).is_err() {
            continue;
        }

        match run_backend(backend, text) {
            Ok(()) => {
                debug!("Text copied to clipboard with {}", backend.name);
                return Ok(CopiedWith::Tool(backend.name));
            }
            Err(err) => {
                warn!("{} failed: {}", backend.name, err);
                last_error = Some(err);
            }
        }
    }

    match last_error {
        Some(err) => Err(err.context("Every clipboard backend failed")),
        None => Err(anyhow!(
            "No clipboard available: native backend failed and no wl-copy/xclip/xsel found"
        )),
    }
}

fn run_backend(backend: &ClipboardBackend, text: &str) -> Result<()> {
    let mut child = Command::new(backend.copy_cmd)
        .args(backend.copy_args)
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to start {}", backend.copy_cmd))?;

    // stdin must be closed before waiting or the tool never sees EOF
    {
        let mut stdin = child.stdin.take().context("Clipboard tool has no stdin")?;
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {}", backend.copy_cmd))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {}", backend.copy_cmd))?;

    if status.success() {
        Ok(())
    } else {
        Err(anyhow!("{} exited with {}", backend.copy_cmd, status))
    }
}

struct ClipboardBackend {
    name: &'static str,
    copy_cmd: &'static str,
    copy_args: &'static [&'static str],
}

const CLIPBOARD_BACKENDS: &[ClipboardBackend] = &[
    ClipboardBackend {
        name: "wl-copy",
        copy_cmd: "wl-copy",
        copy_args: &[],
    },
    ClipboardBackend {
        name: "xclip",
        copy_cmd: "xclip",
        copy_args: &["-selection", "clipboard"],
    },
    ClipboardBackend {
        name: "xsel",
        copy_cmd: "xsel",
        copy_args: &["--clipboard", "--input"],
    },
];
