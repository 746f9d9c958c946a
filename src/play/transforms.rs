//! Transform pipeline infrastructure
//!
//! Compilation is a chain of typed stages:
//!
//!     String --ParseScript--> Script --Perform--> Play
//!
//! Any type implementing [`Runnable<I, O>`] is a stage. A [`Transform<I, O>`] wraps a chain of
//! stages and grows with [`Transform::then`]; the compiler enforces that each stage's input is
//! the previous stage's output.
//!
//! The default pipeline is pre-built as [`STRING_TO_PLAY`]. Pipelines for a custom vocabulary
//! come from [`play_transform`].

use crate::play::error::PlayError;
use crate::play::performance::Play;
use crate::play::script::Script;
use crate::play::vocabulary::Vocabulary;
use once_cell::sync::Lazy;

/// Trait for anything that can transform an input to an output
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> Result<O, PlayError>;
}

/// A composable transformation pipeline
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, PlayError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, PlayError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain a stage after this transform, producing a transform from `I` to `O2`
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, PlayError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, PlayError> {
        Transform::run(self, input)
    }
}

/// String → Script: load the YAML document
pub struct ParseScript;

impl Runnable<String, Script> for ParseScript {
    fn run(&self, input: String) -> Result<Script, PlayError> {
        Script::from_yaml(&input)
    }
}

/// Script → Play: build the roster and perform the plot
pub struct Perform {
    vocabulary: Vocabulary,
}

impl Perform {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Perform { vocabulary }
    }
}

impl Runnable<Script, Play> for Perform {
    fn run(&self, input: Script) -> Result<Play, PlayError> {
        Play::perform(&input, &self.vocabulary)
    }
}

/// Type alias for the script loading transform
pub type ScriptTransform = Transform<String, Script>;

/// Type alias for the full compilation transform
pub type PlayTransform = Transform<String, Play>;

/// String → Script
pub static STRING_TO_SCRIPT: Lazy<ScriptTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(ParseScript));

/// String → Play with the default vocabulary
pub static STRING_TO_PLAY: Lazy<PlayTransform> =
    Lazy::new(|| play_transform(Vocabulary::default()));

/// String → Play with the given vocabulary
pub fn play_transform(vocabulary: Vocabulary) -> PlayTransform {
    Transform::from_fn(Ok)
        .then(ParseScript)
        .then(Perform::new(vocabulary))
}
