//! The exploration session.
//!
//! [`Explorer`] ties the providers to the layout engine and tracks what the
//! user is looking at: the current analysis and its live layout run, the
//! selected bubble, and the last comparison.
//!
//! Interaction rules:
//! - A search replaces everything. The previous run is cancelled before the
//!   new node set is built. A failed search leaves the previous result intact.
//! - Clicking a bubble selects it; the layout is untouched.
//! - Clicking the selected bubble again recenters on its word. If another
//!   word was selected before it, the two are compared first. Comparison
//!   failures are logged and otherwise ignored.
//! - Clicking the selected center bubble again does nothing.

use log::{debug, info, warn};

use lexibubble_core::{
    geometry::Size,
    identifier::NodeId,
    word::{AnalysisResponse, Comparison, WordBubble},
};

use crate::{
    LexiError,
    config::AppConfig,
    layout::{self, Entry, LayoutRun, LayoutScheduler, NodeSet, PositionBoard, PositionFrame},
    provider::{AnalysisProvider, AnalysisRequest, ComparisonProvider},
};

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The node is now selected.
    Selected(NodeId),
    /// A new search for this word replaced the layout.
    Recentered(String),
    /// Unknown node, or a second click on the center.
    Ignored,
}

/// The analysis currently on screen.
#[derive(Debug)]
struct Exploration {
    analysis: AnalysisResponse,
    nodes: NodeSet,
    run: LayoutRun,
}

/// Interactive exploration state over two providers.
#[derive(Debug)]
pub struct Explorer<A, C> {
    config: AppConfig,
    analyzer: A,
    comparer: C,
    canvas: Size,
    scheduler: LayoutScheduler,
    board: PositionBoard,
    current: Option<Exploration>,
    selected: Option<NodeId>,
    previous_word: Option<String>,
    comparison: Option<Comparison>,
}

impl<A, C> Explorer<A, C>
where
    A: AnalysisProvider,
    C: ComparisonProvider,
{
    pub fn new(config: AppConfig, analyzer: A, comparer: C, canvas: Size) -> Self {
        let scheduler = LayoutScheduler::new();
        Self {
            config,
            analyzer,
            comparer,
            canvas,
            board: PositionBoard::new(scheduler.clone()),
            scheduler,
            current: None,
            selected: None,
            previous_word: None,
            comparison: None,
        }
    }

    /// Searches for `word` and starts a fresh layout.
    ///
    /// # Errors
    ///
    /// Returns [`LexiError::Validation`] for an empty word, without calling
    /// the provider, and [`LexiError::Provider`] if the analysis fails. In
    /// both cases the previous result stays in place.
    pub fn search(&mut self, word: &str) -> Result<(), LexiError> {
        self.rebuild(word)?;
        self.comparison = None;
        Ok(())
    }

    fn rebuild(&mut self, word: &str) -> Result<(), LexiError> {
        let request = AnalysisRequest::with_config(word, self.config.provider())?;
        info!(word = request.word(); "Searching");

        let analysis = self.analyzer.analyze(&request).inspect_err(|err| {
            warn!(word = request.word(), err:% = err; "Analysis failed");
        })?;

        let token = self.scheduler.begin();
        self.board.clear();

        let nodes = NodeSet::from_analysis(&analysis, self.config.layout().seeding());
        let run = layout::compute_layout(&nodes, self.canvas, token, self.config.layout());

        self.current = Some(Exploration {
            analysis,
            nodes,
            run,
        });
        self.selected = None;
        self.previous_word = None;
        Ok(())
    }

    /// Handles a click on the bubble `id`.
    ///
    /// # Errors
    ///
    /// Returns the search error if recentering fails; the current result
    /// stays in place.
    pub fn click(&mut self, id: NodeId) -> Result<ClickOutcome, LexiError> {
        let Some(entry) = self.entry(id) else {
            debug!(node_id:% = id; "Click on unknown node ignored");
            return Ok(ClickOutcome::Ignored);
        };

        if self.selected != Some(id) {
            self.previous_word = self.selected_entry().map(|entry| entry.word().to_string());
            self.selected = Some(id);
            self.comparison = None;
            debug!(node_id:% = id; "Node selected");
            return Ok(ClickOutcome::Selected(id));
        }

        if entry.node().kind().is_center() {
            return Ok(ClickOutcome::Ignored);
        }

        let word = entry.word().to_string();
        if let Some(previous) = self.previous_word.clone().filter(|previous| *previous != word) {
            self.comparison = match self.comparer.compare(&previous, &word) {
                Ok(comparison) => Some(comparison),
                Err(err) => {
                    warn!(first = previous.as_str(), second = word.as_str(), err:err; "Comparison failed");
                    None
                }
            };
        }

        self.rebuild(&word)?;
        Ok(ClickOutcome::Recentered(word))
    }

    /// Clears the selection and the comparison.
    pub fn dismiss(&mut self) {
        self.selected = None;
        self.previous_word = None;
        self.comparison = None;
    }

    /// Advances the live run by one tick and publishes the frame.
    ///
    /// Returns `false` once there is nothing left to do.
    pub fn tick(&mut self) -> bool {
        let Some(frame) = self.current.as_mut().and_then(|current| current.run.next()) else {
            return false;
        };
        self.board.publish(frame)
    }

    /// Ticks until the live run converges and returns the final frame.
    pub fn run_to_convergence(&mut self) -> Option<&PositionFrame> {
        while self.tick() {}

        let pending = self
            .current
            .as_ref()
            .filter(|_| self.board.frame().is_none())
            .and_then(|current| current.run.current_frame());
        if let Some(frame) = pending {
            self.board.publish(frame);
        }
        self.board.frame()
    }

    /// Changes the canvas size. Invalid sizes are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        let canvas = Size::new(width, height);
        if !canvas.is_valid() {
            warn!(width, height; "Ignoring invalid canvas size");
            return;
        }

        debug!(width, height; "Canvas resized");
        self.canvas = canvas;
        self.board.resize(canvas);
        if let Some(current) = &mut self.current {
            current.run.resize(canvas);
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn analysis(&self) -> Option<&AnalysisResponse> {
        self.current.as_ref().map(|current| &current.analysis)
    }

    pub fn nodes(&self) -> Option<&NodeSet> {
        self.current.as_ref().map(|current| &current.nodes)
    }

    /// Latest published frame of the live run.
    pub fn frame(&self) -> Option<&PositionFrame> {
        self.board.frame()
    }

    pub fn is_converged(&self) -> bool {
        self.current
            .as_ref()
            .is_none_or(|current| current.run.is_converged())
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Full record of the selected word, for a detail panel.
    pub fn selected_bubble(&self) -> Option<&WordBubble> {
        let word = self.selected_entry()?.word();
        self.analysis()?.find_word(word)
    }

    pub fn comparison(&self) -> Option<&Comparison> {
        self.comparison.as_ref()
    }

    fn entry(&self, id: NodeId) -> Option<&Entry> {
        self.nodes()?.get(id)
    }

    fn selected_entry(&self) -> Option<&Entry> {
        self.entry(self.selected?)
    }
}
