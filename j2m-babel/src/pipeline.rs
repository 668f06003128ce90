//! Ordered rewrite pipelines
//!
//! Both conversion directions are a list of [`Rule`]s applied one after the
//! other over the whole text. A rule never sees the output of a rule that comes
//! after it, so the order of the list is part of the conversion semantics:
//! moving a rule can make it re-match constructs produced by an earlier one.
//!
//! A rule is a tagged record rather than a trait object:
//!
//! - [`Rewrite::Template`]: a pattern and a `${n}` replacement template
//! - [`Rewrite::Computed`]: a pattern and a function building the replacement
//!   from the captures
//! - [`Rewrite::Scan`]: a whole-text function, for rules the pattern language
//!   cannot express (back-references, per-block state)
//!
//! Every rule is total. Text a rule does not recognize is copied unchanged.

use regex::{Captures, Regex};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Strategy used by a [`Rule`] to rewrite text.
pub enum Rewrite {
    /// Replace every match with a template (`${1}` refers to capture groups).
    Template(Regex, &'static str),
    /// Replace every match with the result of a function of its captures.
    Computed(Regex, fn(&Captures) -> String),
    /// Rewrite the whole text with a custom function.
    Scan(fn(&str) -> String),
}

/// A named rewrite step.
pub struct Rule {
    name: &'static str,
    rewrite: Rewrite,
}

impl Rule {
    /// Build a template rule.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` does not compile. Patterns are string constants, so
    /// this surfaces the first time the owning pipeline is used.
    pub fn template(name: &'static str, pattern: &str, template: &'static str) -> Self {
        Self {
            name,
            rewrite: Rewrite::Template(compile(name, pattern), template),
        }
    }

    /// Build a rule whose replacement is computed from the captures.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` does not compile.
    pub fn computed(name: &'static str, pattern: &str, replace: fn(&Captures) -> String) -> Self {
        Self {
            name,
            rewrite: Rewrite::Computed(compile(name, pattern), replace),
        }
    }

    /// Build a rule that rewrites the whole text at once.
    pub fn scan(name: &'static str, rewrite: fn(&str) -> String) -> Self {
        Self {
            name,
            rewrite: Rewrite::Scan(rewrite),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the rule once, globally, over `text`.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.rewrite {
            Rewrite::Template(pattern, template) => pattern.replace_all(text, *template),
            Rewrite::Computed(pattern, replace) => {
                pattern.replace_all(text, |caps: &Captures| replace(caps))
            }
            Rewrite::Scan(rewrite) => Cow::Owned(rewrite(text)),
        }
    }
}

fn compile(name: &str, pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("rule '{name}' has an invalid pattern: {err}"))
}

/// The effect of one rule during a traced run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleStep {
    /// Name of the rule.
    pub rule: &'static str,
    /// Whether the rule changed the text.
    pub changed: bool,
    /// Text after the rule ran.
    pub output: String,
}

/// An ordered list of rules converting one dialect into another.
pub struct Pipeline {
    name: &'static str,
    rules: Vec<Rule>,
}

impl Pipeline {
    pub fn new(name: &'static str, rules: Vec<Rule>) -> Self {
        Self { name, rules }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The rules in application order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule in order and return the converted text.
    pub fn run(&self, source: &str) -> String {
        debug!(
            pipeline = self.name,
            rules = self.rules.len(),
            bytes = source.len(),
            "running rewrite pipeline"
        );
        let mut text = source.to_string();
        for rule in &self.rules {
            let rewritten = match rule.apply(&text) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(rewritten) => rewritten,
            };
            if rewritten != text {
                trace!(pipeline = self.name, rule = rule.name, "rule rewrote text");
            }
            text = rewritten;
        }
        text
    }

    /// Run every rule in order, recording the text after each one.
    pub fn trace(&self, source: &str) -> Vec<RuleStep> {
        let mut steps = Vec::with_capacity(self.rules.len());
        let mut text = source.to_string();
        for rule in &self.rules {
            let output = rule.apply(&text).into_owned();
            steps.push(RuleStep {
                rule: rule.name,
                changed: output != text,
                output: output.clone(),
            });
            text = output;
        }
        steps
    }
}
