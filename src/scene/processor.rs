//! Background layout processor for non-blocking render-model rebuilds.
//!
//! Moves render-model generation off the caller's thread. Requests are
//! queued over a channel; when several pile up only the newest is built,
//! and results are published through a lock-free triple buffer. A
//! superseded request is never built, and a superseded result is
//! overwritten before it can be observed.
//!
//! Resubmitting an unchanged molecule with unchanged options republishes
//! the cached model instead of recomputing it.

use std::sync::{mpsc, Arc};

use super::render_model::RenderModel;
use crate::element::ElementTable;
use crate::error::LigviewError;
use crate::model::Molecule;
use crate::options::Options;
use crate::util::hash::molecule_fingerprint;

/// Work sent to the processor thread.
#[derive(Debug)]
pub enum LayoutRequest {
    /// Rebuild the render model for `molecule` under `options`.
    Rebuild {
        /// Caller-visible sequence number, echoed in the result.
        generation: u64,
        /// Molecule snapshot.
        molecule: Arc<Molecule>,
        /// Options snapshot.
        options: Options,
    },
    /// Stop the thread.
    Shutdown,
}

/// A finished render model tagged with the request that produced it.
#[derive(Debug, Clone)]
pub struct PreparedLayout {
    /// Generation of the request this model answers.
    pub generation: u64,
    /// The built model.
    pub model: RenderModel,
}

/// Background thread that builds render models.
pub struct LayoutProcessor {
    request_tx: mpsc::Sender<LayoutRequest>,
    result: triple_buffer::Output<Option<PreparedLayout>>,
    thread: Option<std::thread::JoinHandle<()>>,
    next_generation: u64,
}

impl LayoutProcessor {
    /// Spawn the background layout thread.
    ///
    /// # Errors
    ///
    /// Returns [`LigviewError::ThreadSpawn`] if the thread fails to spawn.
    pub fn new() -> Result<Self, LigviewError> {
        let (request_tx, request_rx) = mpsc::channel::<LayoutRequest>();
        let (result_input, result_output) = triple_buffer::triple_buffer(&None);

        let thread = std::thread::Builder::new()
            .name("layout-processor".into())
            .spawn(move || {
                Self::thread_loop(request_rx, result_input);
            })
            .map_err(LigviewError::ThreadSpawn)?;

        Ok(Self {
            request_tx,
            result: result_output,
            thread: Some(thread),
            next_generation: 0,
        })
    }

    /// Queue a rebuild (non-blocking). Returns the generation number the
    /// result will carry.
    pub fn submit(&mut self, molecule: Arc<Molecule>, options: Options) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;
        if self
            .request_tx
            .send(LayoutRequest::Rebuild {
                generation,
                molecule,
                options,
            })
            .is_err()
        {
            log::warn!("layout processor is gone; dropping request {generation}");
        }
        generation
    }

    /// Generation of the most recent submission (0 before any).
    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.next_generation
    }

    /// Non-blocking check for a completed render model.
    pub fn try_recv(&mut self) -> Option<PreparedLayout> {
        let _ = self.result.update();
        self.result.output_buffer_mut().take()
    }

    /// Shut down the background thread and wait for it to finish.
    pub fn shutdown(&mut self) {
        let _ = self.request_tx.send(LayoutRequest::Shutdown);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }

    /// Background thread main loop.
    #[allow(clippy::needless_pass_by_value)]
    fn thread_loop(
        request_rx: mpsc::Receiver<LayoutRequest>,
        mut result_input: triple_buffer::Input<Option<PreparedLayout>>,
    ) {
        let mut cache = ModelCache::default();

        while let Ok(request) = request_rx.recv() {
            match drain_latest(request, &request_rx) {
                LayoutRequest::Shutdown => break,
                LayoutRequest::Rebuild {
                    generation,
                    molecule,
                    options,
                } => {
                    let model = cache.get_or_build(&molecule, &options);
                    result_input.write(Some(PreparedLayout { generation, model }));
                }
            }
        }
    }
}

impl Drop for LayoutProcessor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Last built model with the molecule and options it was built from.
///
/// The fingerprint is only a fast reject; a hit also requires the same
/// molecule (by pointer or by value), so a hash collision rebuilds.
#[derive(Default)]
struct ModelCache {
    last: Option<CachedModel>,
}

struct CachedModel {
    fingerprint: u64,
    molecule: Arc<Molecule>,
    options: Options,
    model: RenderModel,
}

impl CachedModel {
    fn matches(&self, fingerprint: u64, molecule: &Arc<Molecule>, options: &Options) -> bool {
        self.fingerprint == fingerprint
            && self.options == *options
            && (Arc::ptr_eq(&self.molecule, molecule) || *self.molecule == **molecule)
    }
}

impl ModelCache {
    fn get_or_build(&mut self, molecule: &Arc<Molecule>, options: &Options) -> RenderModel {
        let fingerprint = molecule_fingerprint(molecule);
        if let Some(cached) = &self.last {
            if cached.matches(fingerprint, molecule, options) {
                log::debug!("layout unchanged; republishing cached model");
                return cached.model.clone();
            }
        }
        let elements = ElementTable::with_color_overrides(&options.colors);
        let model = RenderModel::build(molecule, options, &elements);
        self.last = Some(CachedModel {
            fingerprint,
            molecule: Arc::clone(molecule),
            options: options.clone(),
            model: model.clone(),
        });
        model
    }

    #[cfg(test)]
    fn set_fingerprint(&mut self, fingerprint: u64) {
        if let Some(cached) = &mut self.last {
            cached.fingerprint = fingerprint;
        }
    }
}

/// Drain queued requests, keeping only the latest. A queued `Shutdown`
/// always wins.
fn drain_latest(
    initial: LayoutRequest,
    rx: &mpsc::Receiver<LayoutRequest>,
) -> LayoutRequest {
    let mut latest = initial;
    while let Ok(newer) = rx.try_recv() {
        if matches!(latest, LayoutRequest::Shutdown) {
            continue;
        }
        latest = newer;
    }
    latest
}
