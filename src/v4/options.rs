//! Reply option storage and selection.
//!
//! A server keeps the options it is willing to hand out in an [`OptionSet`] and
//! picks from it using the client's parameter request list (option 55).

use super::code::OptionCode;
use bytes::Bytes;
use std::collections::{btree_map, BTreeMap};

/// A single option ready to be written into a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyOption {
    pub code: OptionCode,
    pub value: Bytes,
}

impl ReplyOption {
    pub fn new(code: OptionCode, value: impl Into<Bytes>) -> Self {
        Self {
            code,
            value: value.into(),
        }
    }
}

/// Option values keyed by code. Iteration is in ascending code order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    options: BTreeMap<OptionCode, Bytes>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `code`, returning the value it replaced.
    pub fn insert(&mut self, code: OptionCode, value: impl Into<Bytes>) -> Option<Bytes> {
        self.options.insert(code, value.into())
    }

    pub fn get(&self, code: OptionCode) -> Option<&Bytes> {
        self.options.get(&code)
    }

    pub fn remove(&mut self, code: OptionCode) -> Option<Bytes> {
        self.options.remove(&code)
    }

    pub fn contains(&self, code: OptionCode) -> bool {
        self.options.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, OptionCode, Bytes> {
        self.options.iter()
    }

    /// Selects options in the exact order given by `order`.
    ///
    /// Codes missing from the set are skipped. A code listed twice yields two
    /// entries; the result is never deduplicated.
    pub fn select_order(&self, order: &[OptionCode]) -> Vec<ReplyOption> {
        let mut selected = Vec::with_capacity(order.len());
        for &code in order {
            match self.options.get(&code) {
                Some(value) => selected.push(ReplyOption {
                    code,
                    value: value.clone(),
                }),
                None => tracing::trace!("Requested option {} not configured, skipping", code),
            }
        }
        tracing::debug!(
            "Selected {} of {} requested options",
            selected.len(),
            order.len()
        );
        selected
    }

    /// Like [`select_order`](Self::select_order), but `None` selects every
    /// stored option in ascending code order.
    pub fn select_order_or_all(&self, order: Option<&[OptionCode]>) -> Vec<ReplyOption> {
        match order {
            Some(order) => self.select_order(order),
            None => self
                .options
                .iter()
                .map(|(&code, value)| ReplyOption {
                    code,
                    value: value.clone(),
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = (&'a OptionCode, &'a Bytes);
    type IntoIter = btree_map::Iter<'a, OptionCode, Bytes>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Into<Bytes>> FromIterator<(OptionCode, V)> for OptionSet {
    fn from_iter<I: IntoIterator<Item = (OptionCode, V)>>(iter: I) -> Self {
        Self {
            options: iter
                .into_iter()
                .map(|(code, value)| (code, value.into()))
                .collect(),
        }
    }
}
