//! Log source discovery and streaming.
//!
//! The probe runs inside a container, so its diagnostic stream is reached
//! through `docker logs -f`. Container stdout and stderr are tailed as
//! separate pipes and merged line-by-line; the tracker downstream filters
//! out whatever arrives on the protocol side.

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::process::{Child, ChildStderr, ChildStdout, Command};

use crate::core::Result;

/// Find a running container for the given image.
///
/// Returns the first name reported by `docker ps`, or `None` when no
/// container matches.
pub async fn discover_container(image: &str) -> Result<Option<String>> {
    let output = Command::new("docker")
        .args([
            "ps",
            "--filter",
            &format!("ancestor={image}"),
            "--format",
            "{{.Names}}",
        ])
        .output()
        .await?;

    Ok(first_container_name(&String::from_utf8_lossy(&output.stdout)))
}

/// Pick the first non-empty name from `docker ps` output.
pub fn first_container_name(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(String::from)
}

/// Merged line stream over a container's stdout and stderr.
pub struct LogStream {
    _child: Child,
    stdout: Option<Lines<BufReader<ChildStdout>>>,
    stderr: Option<Lines<BufReader<ChildStderr>>>,
}

impl LogStream {
    /// Start following a container's logs.
    pub fn tail(container: &str) -> Result<Self> {
        let mut child = Command::new("docker")
            .args(["logs", "-f", container])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        let stdout = child.stdout.take().map(|s| BufReader::new(s).lines());
        let stderr = child.stderr.take().map(|s| BufReader::new(s).lines());

        Ok(Self {
            _child: child,
            stdout,
            stderr,
        })
    }

    /// Next line from either pipe; `None` once both are exhausted.
    ///
    /// Read errors on a pipe are treated as end-of-stream for that pipe.
    pub async fn next_line(&mut self) -> Option<String> {
        loop {
            match (&mut self.stdout, &mut self.stderr) {
                (None, None) => return None,
                (Some(out), None) => match out.next_line().await {
                    Ok(Some(line)) => return Some(line),
                    _ => self.stdout = None,
                },
                (None, Some(err)) => match err.next_line().await {
                    Ok(Some(line)) => return Some(line),
                    _ => self.stderr = None,
                },
                (Some(out), Some(err)) => {
                    tokio::select! {
                        line = out.next_line() => match line {
                            Ok(Some(line)) => return Some(line),
                            _ => self.stdout = None,
                        },
                        line = err.next_line() => match line {
                            Ok(Some(line)) => return Some(line),
                            _ => self.stderr = None,
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_container_name_picks_first() {
        assert_eq!(
            first_container_name("probe-1\nprobe-2\n"),
            Some("probe-1".to_string())
        );
    }

    #[test]
    fn test_first_container_name_skips_blanks() {
        assert_eq!(
            first_container_name("\n  \nprobe-3\n"),
            Some("probe-3".to_string())
        );
    }

    #[test]
    fn test_first_container_name_empty() {
        assert_eq!(first_container_name(""), None);
        assert_eq!(first_container_name("\n\n"), None);
    }
}
