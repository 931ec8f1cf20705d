use super::encoder_repository::{EncodeJob, VideoEncoder};
use async_trait::async_trait;
use std::ffi::OsString;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Lines of ffmpeg diagnostics kept in the error message
const STDERR_TAIL_LINES: usize = 20;

/// ffmpeg subprocess encoder for still-image videos
pub struct FfmpegEncoder {
    ffmpeg_path: String,
    audio_bitrate: String,
    timeout: Option<Duration>,
}

impl FfmpegEncoder {
    pub fn new(ffmpeg_path: String, audio_bitrate: String, timeout: Option<Duration>) -> Self {
        Self {
            ffmpeg_path,
            audio_bitrate,
            timeout,
        }
    }

    /// Arguments for looping `image` over `audio` into an H.264/AAC MP4.
    ///
    /// The pad filter rounds odd image dimensions up, which libx264 with
    /// yuv420p requires. `-shortest` alone lets the looped video run past the
    /// audio by the muxer's interleave buffer, so the shortest-stream cut is
    /// also applied at the format level with no interleave delay.
    pub fn build_args(&self, job: &EncodeJob) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "-hide_banner",
            "-loglevel",
            "error",
            "-y",
            "-loop",
            "1",
            "-i",
        ]
        .iter()
        .map(OsString::from)
        .collect();

        args.push(job.image_path.clone().into_os_string());
        args.push("-i".into());
        args.push(job.audio_path.clone().into_os_string());

        for arg in [
            "-c:v",
            "libx264",
            "-tune",
            "stillimage",
            "-vf",
            "pad=ceil(iw/2)*2:ceil(ih/2)*2",
            "-c:a",
            "aac",
            "-b:a",
        ] {
            args.push(arg.into());
        }
        args.push(self.audio_bitrate.clone().into());

        for arg in [
            "-pix_fmt",
            "yuv420p",
            "-shortest",
            "-fflags",
            "+shortest",
            "-max_interleave_delta",
            "0",
        ] {
            args.push(arg.into());
        }
        args.push(job.output_path.clone().into_os_string());

        args
    }

    async fn run(&self, job: &EncodeJob) -> Result<std::process::Output, String> {
        let child = Command::new(&self.ffmpeg_path)
            .args(self.build_args(job))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| format!("Failed to start {}: {}", self.ffmpeg_path, e))?;

        let output = child.wait_with_output();

        let waited = match self.timeout {
            // Dropping the timed-out future kills the child
            Some(limit) => tokio::time::timeout(limit, output)
                .await
                .map_err(|_| format!("ffmpeg did not finish within {}s", limit.as_secs()))?,
            None => output.await,
        };

        waited.map_err(|e| format!("Failed to wait for ffmpeg: {}", e))
    }
}

fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.trim().lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}

#[async_trait]
impl VideoEncoder for FfmpegEncoder {
    async fn encode(&self, job: &EncodeJob) -> Result<(), String> {
        let start_time = std::time::Instant::now();

        tracing::debug!(
            image = %job.image_path.display(),
            audio = %job.audio_path.display(),
            output = %job.output_path.display(),
            "Running ffmpeg"
        );

        let output = self.run(job).await?;

        if !output.status.success() {
            let stderr = stderr_tail(&String::from_utf8_lossy(&output.stderr));
            tracing::error!(
                status = %output.status,
                stderr = %stderr,
                "ffmpeg failed"
            );
            return Err(format!("ffmpeg exited with {}: {}", output.status, stderr));
        }

        tracing::info!(
            latency_ms = start_time.elapsed().as_millis(),
            "ffmpeg encode completed"
        );

        Ok(())
    }

    async fn is_available(&self) -> bool {
        Command::new(&self.ffmpeg_path)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }
}
