//! Procedural playback through rodio.
//!
//! The output stream is not `Send`, so it lives on a dedicated audio thread;
//! [`ToneBackend`] only holds the command sender. Sounds are synthesized once
//! at start-up: a crackling fireplace loop and a short bell jingle.

use std::f32::consts::TAU;
use std::sync::mpsc::{self, Receiver, Sender, SyncSender};
use std::thread;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

use crate::core::{AudioBackend, AudioError};

const SAMPLE_RATE: u32 = 22050;

enum Command {
    /// Replies once the loop is playing, or with why it could not start.
    StartAmbient(f32, SyncSender<Result<(), AudioError>>),
    StopAmbient,
    Cue(f32),
}

/// Handle to the audio thread.
pub struct ToneBackend {
    tx: Sender<Command>,
}

impl ToneBackend {
    /// Open the default output device on a new audio thread.
    pub fn open() -> Result<Self, AudioError> {
        let (tx, rx) = mpsc::channel();
        let (ready_tx, ready_rx) = mpsc::sync_channel(1);

        thread::Builder::new()
            .name("lucky-draw-audio".to_string())
            .spawn(move || audio_thread(rx, ready_tx))
            .map_err(|e| AudioError::Rejected(e.to_string()))?;

        ready_rx.recv().map_err(|_| AudioError::Disconnected)??;
        Ok(Self { tx })
    }

    fn send(&self, cmd: Command) -> Result<(), AudioError> {
        self.tx.send(cmd).map_err(|_| AudioError::Disconnected)
    }
}

impl AudioBackend for ToneBackend {
    fn start_ambient(&mut self, volume: f32) -> Result<(), AudioError> {
        let (reply_tx, reply_rx) = mpsc::sync_channel(1);
        self.send(Command::StartAmbient(volume, reply_tx))?;
        reply_rx.recv().map_err(|_| AudioError::Disconnected)?
    }

    fn stop_ambient(&mut self) {
        let _ = self.send(Command::StopAmbient);
    }

    fn play_cue(&mut self, volume: f32) -> Result<(), AudioError> {
        self.send(Command::Cue(volume))
    }
}

fn audio_thread(rx: Receiver<Command>, ready: SyncSender<Result<(), AudioError>>) {
    let (_stream, handle) = match OutputStream::try_default() {
        Ok(pair) => pair,
        Err(err) => {
            let _ = ready.send(Err(AudioError::Rejected(err.to_string())));
            return;
        }
    };
    let _ = ready.send(Ok(()));

    let fireplace = gen_fireplace();
    let jingle = gen_jingle();
    let mut ambient: Option<Sink> = None;
    let mut cue: Option<Sink> = None;

    while let Ok(cmd) = rx.recv() {
        match cmd {
            Command::StartAmbient(volume, reply) => {
                if ambient.is_none() {
                    ambient = open_sink(&handle, fireplace.clone(), true);
                }
                let started = match &ambient {
                    Some(sink) => {
                        sink.set_volume(volume);
                        sink.play();
                        Ok(())
                    }
                    None => Err(AudioError::Rejected("could not open sink".to_string())),
                };
                let _ = reply.send(started);
            }
            Command::StopAmbient => {
                // Dropping the sink discards its position; the next start begins at zero.
                if let Some(sink) = ambient.take() {
                    sink.stop();
                }
            }
            Command::Cue(volume) => {
                if let Some(sink) = cue.take() {
                    sink.stop();
                }
                cue = open_sink(&handle, jingle.clone(), false);
                if let Some(sink) = &cue {
                    sink.set_volume(volume);
                }
            }
        }
    }
    log::debug!("audio thread exiting");
}

fn open_sink(handle: &OutputStreamHandle, samples: Vec<f32>, looped: bool) -> Option<Sink> {
    let sink = match Sink::try_new(handle) {
        Ok(sink) => sink,
        Err(err) => {
            log::debug!("could not open sink: {err}");
            return None;
        }
    };
    let source = SamplesBuffer::new(1, SAMPLE_RATE, samples);
    if looped {
        sink.append(source.repeat_infinite());
    } else {
        sink.append(source);
    }
    Some(sink)
}

/// Two seconds of low rumble with random crackles; loops seamlessly enough.
fn gen_fireplace() -> Vec<f32> {
    let n = SAMPLE_RATE as usize * 2;
    let mut rng: u32 = 0x2545_f491;
    let mut brown = 0.0_f32;
    let mut pop = 0.0_f32;

    (0..n)
        .map(|_| {
            rng = rng.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let white = (rng >> 8) as f32 / (1u32 << 24) as f32 * 2.0 - 1.0;
            brown = (brown + white * 0.02).clamp(-1.0, 1.0) * 0.998;

            if rng >> 20 == 0 {
                pop = 1.0;
            }
            pop *= 0.93;

            brown * 0.6 + white * pop * 0.5
        })
        .collect()
}

/// Bell arpeggio: E E E, E E E, E G C D E.
fn gen_jingle() -> Vec<f32> {
    const E5: f32 = 659.25;
    const G5: f32 = 783.99;
    const C5: f32 = 523.25;
    const D5: f32 = 587.33;
    let notes: [(f32, f32); 11] = [
        (E5, 0.14),
        (E5, 0.14),
        (E5, 0.28),
        (E5, 0.14),
        (E5, 0.14),
        (E5, 0.28),
        (E5, 0.14),
        (G5, 0.14),
        (C5, 0.2),
        (D5, 0.08),
        (E5, 0.5),
    ];

    let mut samples = Vec::new();
    for (freq, dur) in notes {
        let n = (SAMPLE_RATE as f32 * dur) as usize;
        for i in 0..n {
            let t = i as f32 / SAMPLE_RATE as f32;
            let env = (-t * 9.0).exp();
            let wave = (t * freq * TAU).sin() * 0.7 + (t * freq * 2.0 * TAU).sin() * 0.3;
            samples.push(wave * env * 0.4);
        }
    }
    samples
}
