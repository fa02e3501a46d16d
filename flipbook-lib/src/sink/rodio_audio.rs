use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use log::{error, warn};
use rodio::source::Source;
use rodio::{Decoder, OutputStreamBuilder, Sink};

use super::{AudioSink, SinkError};

const OUTPUT_STREAM_OPEN_RETRIES: usize = 5;
const OUTPUT_STREAM_OPEN_RETRY_MS: u64 = 100;

/// File-backed [`AudioSink`] playing through the default rodio output.
///
/// The track is decoded once up front and appended `loop_count` times so that
/// audio looping matches the animation's loop count. The output stream lives
/// on a dedicated playback thread; `stop` signals that thread and returns
/// without blocking.
pub struct RodioAudioSink {
    path: PathBuf,
    loop_count: u32,
    volume: f32,
    abort: Mutex<Arc<AtomicBool>>,
}

impl RodioAudioSink {
    pub fn new(path: PathBuf, loop_count: u32) -> Self {
        Self {
            path,
            loop_count,
            volume: 0.8,
            abort: Mutex::new(Arc::new(AtomicBool::new(false))),
        }
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }
}

impl AudioSink for RodioAudioSink {
    fn play(&self) -> Result<(), SinkError> {
        // Decode on the caller's thread so a bad file is reported
        // synchronously; only the output stream lives on the playback thread.
        let file = File::open(&self.path)?;
        let decoder = Decoder::new(BufReader::new(file))
            .map_err(|err| SinkError::Decode(err.to_string()))?;
        let source = decoder.buffered();

        let mut abort_slot = self.abort.lock().unwrap();
        abort_slot.store(true, Ordering::SeqCst);
        let abort = Arc::new(AtomicBool::new(false));
        *abort_slot = abort.clone();
        drop(abort_slot);

        let loop_count = self.loop_count;
        let volume = self.volume;

        thread::spawn(move || {
            let mut stream = None;
            for attempt in 1..=OUTPUT_STREAM_OPEN_RETRIES {
                match OutputStreamBuilder::open_default_stream() {
                    Ok(s) => {
                        stream = Some(s);
                        break;
                    }
                    Err(err) => {
                        if attempt == OUTPUT_STREAM_OPEN_RETRIES {
                            error!(
                                "failed to open default output stream after {} attempts: {}",
                                OUTPUT_STREAM_OPEN_RETRIES, err
                            );
                            return;
                        }
                        warn!(
                            "open_default_stream attempt {}/{} failed: {}",
                            attempt, OUTPUT_STREAM_OPEN_RETRIES, err
                        );
                        thread::sleep(Duration::from_millis(OUTPUT_STREAM_OPEN_RETRY_MS));
                    }
                }
            }
            let stream = match stream {
                Some(stream) => stream,
                None => return,
            };

            let sink = Sink::connect_new(stream.mixer());
            sink.set_volume(volume);
            for _ in 0..loop_count {
                sink.append(source.clone());
            }
            sink.play();

            loop {
                if abort.load(Ordering::SeqCst) {
                    sink.stop();
                    break;
                }
                if sink.empty() {
                    break;
                }
                thread::sleep(Duration::from_millis(10));
            }
        });

        Ok(())
    }

    fn stop(&self) -> Result<(), SinkError> {
        self.abort.lock().unwrap().store(true, Ordering::SeqCst);
        Ok(())
    }
}
