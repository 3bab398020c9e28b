//! Lifecycle owner for the calculator.
//!
//! The presenter keeps the raw text of the five inputs, persists every edit,
//! restores saved text on startup and runs the calculation on demand. It has
//! no knowledge of egui; the GUI layer forwards events into it and reads the
//! latest results back out.

use tracing::{
    debug,
    warn,
};

use crate::{
    core::{
        calculate,
        markup::render_table,
        InputId,
        InputValues,
        ResultSet,
        ResultsTarget,
    },
    persistence::{
        InputStore,
        KeyValueStore,
    },
};

pub struct Presenter<S: KeyValueStore> {
    store: InputStore<S>,
    raw: [String; 5],
    results: Option<ResultSet>,
}

impl<S: KeyValueStore> Presenter<S> {
    /// Restores saved input text and runs one calculation pass, so saved
    /// values show results without any interaction.
    pub fn init(store: S, target: &mut impl ResultsTarget) -> Self {
        let store = InputStore::new(store);
        let raw = InputId::ALL.map(|id| store.load(id));
        debug!(
            "Restored {} saved inputs",
            raw.iter().filter(|text| !text.is_empty()).count()
        );

        let mut presenter = Self { store, raw, results: None };
        presenter.calculate(target);
        presenter
    }

    pub fn input(&self, id: InputId) -> &str {
        &self.raw[id.index()]
    }

    /// Mutable access for text widgets. Callers must follow up with
    /// [`Presenter::input_changed`] when the text was edited.
    pub fn input_mut(&mut self, id: InputId) -> &mut String {
        &mut self.raw[id.index()]
    }

    /// Replaces the text of one field and saves it. Does not recalculate.
    pub fn set_input(&mut self, id: InputId, raw: &str) {
        self.raw[id.index()] = raw.to_string();
        self.input_changed(id);
    }

    /// Saves the current text of `id` as typed. A failed save is logged; the
    /// value stays in the form either way.
    pub fn input_changed(&mut self, id: InputId) {
        if let Err(e) = self.store.save(id, &self.raw[id.index()]) {
            warn!("Failed to save {}: {}", id, e);
        }
    }

    pub fn clear_inputs(&mut self) {
        for id in InputId::ALL {
            self.set_input(id, "");
        }
    }

    pub fn values(&self) -> InputValues {
        InputValues::from_raw(|id| Some(self.raw[id.index()].as_str()))
    }

    /// Recomputes from the current text and writes the outcome to `target`.
    pub fn calculate(&mut self, target: &mut impl ResultsTarget) -> Option<&ResultSet> {
        self.results = calculate(&self.values());
        match &self.results {
            Some(results) => {
                debug!("Calculated {} results", results.rows().len());
                target.write(&render_table(results));
            }
            None => {
                debug!("Inputs incomplete, clearing results");
                target.clear();
            }
        }
        self.results.as_ref()
    }

    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    pub fn store(&self) -> &InputStore<S> {
        &self.store
    }
}
