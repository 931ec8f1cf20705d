use super::tts_repository::{SpeechProviderError, SpeechRepository, SpeechRequest, SynthesizedAudio};
use crate::domain::shared::AudioEncoding;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::sync::LazyLock;

/// Gemini returns 16-bit mono PCM at this rate unless the MIME type says otherwise
const DEFAULT_PCM_SAMPLE_RATE: u32 = 24_000;

static SAMPLE_RATE_PATTERN: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"(?i)rate=(\d+)").expect("valid sample rate pattern"));

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
    speech_config: SpeechConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig {
    voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig {
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig {
    voice_name: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Gemini generative speech implementation of the speech repository
pub struct GeminiTtsRepository {
    http_client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiTtsRepository {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            model,
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    fn build_request_body(&self, request: &SpeechRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(request.prompt.clone()),
                    inline_data: None,
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["AUDIO".to_string()],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: request.voice.clone(),
                        },
                    },
                },
            },
        }
    }

    /// Call the Gemini generateContent API once
    async fn call_gemini(
        &self,
        request: &SpeechRequest,
    ) -> Result<GenerateContentResponse, SpeechProviderError> {
        if self.api_key.trim().is_empty() {
            return Err(SpeechProviderError::Transport(
                "Gemini API key is not configured (set GEMINI_API_KEY)".to_string(),
            ));
        }

        tracing::info!(
            model = %self.model,
            voice = %request.voice,
            prompt_length = request.prompt.len(),
            "Calling Gemini TTS API"
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&self.build_request_body(request))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, model = %self.model, "Gemini TTS API call failed");
                SpeechProviderError::Transport(format!("Gemini TTS request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = %status.as_u16(),
                body = %error_text,
                "Gemini TTS API returned an error status"
            );
            return Err(SpeechProviderError::Transport(format!(
                "Gemini TTS error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        response.json::<GenerateContentResponse>().await.map_err(|e| {
            SpeechProviderError::Transport(format!("Failed to parse Gemini response: {}", e))
        })
    }
}

/// First inline audio part of the first candidate
fn first_inline_audio(response: GenerateContentResponse) -> Option<InlineData> {
    response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .find_map(|part| part.inline_data)
}

fn is_raw_pcm(mime_type: &str) -> bool {
    let lower = mime_type.to_ascii_lowercase();
    lower.starts_with("audio/l16") || lower.contains("codec=pcm")
}

fn pcm_sample_rate(mime_type: &str) -> u32 {
    SAMPLE_RATE_PATTERN
        .captures(mime_type)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(DEFAULT_PCM_SAMPLE_RATE)
}

/// Wrap 16-bit little-endian mono PCM in a WAV container
pub fn pcm_to_wav(pcm: &[u8], sample_rate: u32) -> Result<Vec<u8>, hound::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::with_capacity(pcm.len() + 44));
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
        for sample in pcm.chunks_exact(2) {
            writer.write_sample(i16::from_le_bytes([sample[0], sample[1]]))?;
        }
        writer.finalize()?;
    }

    Ok(cursor.into_inner())
}

fn decode_inline_audio(inline: &InlineData) -> Result<SynthesizedAudio, SpeechProviderError> {
    let bytes = STANDARD.decode(inline.data.trim()).map_err(|e| {
        SpeechProviderError::Transport(format!("Gemini audio payload is not valid base64: {}", e))
    })?;

    if bytes.is_empty() {
        return Err(SpeechProviderError::NoAudio);
    }

    if is_raw_pcm(&inline.mime_type) {
        let sample_rate = pcm_sample_rate(&inline.mime_type);
        let wav = pcm_to_wav(&bytes, sample_rate).map_err(|e| {
            SpeechProviderError::Transport(format!("Failed to wrap PCM audio: {}", e))
        })?;
        return Ok(SynthesizedAudio {
            audio_data: wav,
            encoding: AudioEncoding::Wav,
        });
    }

    let encoding = AudioEncoding::from_mime_type(&inline.mime_type)
        .unwrap_or_else(|| AudioEncoding::sniff(&bytes));

    Ok(SynthesizedAudio {
        audio_data: bytes,
        encoding,
    })
}

#[async_trait]
impl SpeechRepository for GeminiTtsRepository {
    async fn synthesize(
        &self,
        request: &SpeechRequest,
    ) -> Result<SynthesizedAudio, SpeechProviderError> {
        let start_time = std::time::Instant::now();

        // generateContent has no speaking-rate control
        if let Some(rate) = request.speaking_rate {
            tracing::debug!(speaking_rate = rate, "Speaking rate not supported by Gemini, ignoring");
        }

        let response = self.call_gemini(request).await?;
        let inline = first_inline_audio(response).ok_or_else(|| {
            tracing::error!(model = %self.model, "Gemini response contained no audio part");
            SpeechProviderError::NoAudio
        })?;

        let audio = decode_inline_audio(&inline)?;

        tracing::info!(
            provider = "gemini",
            model = %self.model,
            voice = %request.voice,
            mime_type = %inline.mime_type,
            encoding = %audio.encoding,
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio.audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio)
    }
}
