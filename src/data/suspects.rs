//! Suspect registry
//!
//! A fixed-width hash table from suspect name to the clues attributed to
//! that suspect. Collisions are chained; new suspects and new clues are both
//! prepended, so every list reads most recent first.

use serde::{Deserialize, Serialize};

/// Number of buckets in the registry
pub const BUCKETS: usize = 5;

/// Unreduced name hash: `hash * 31 + byte` over the UTF-8 bytes, wrapping at 32 bits
pub fn hash_name(name: &str) -> u32 {
    name.bytes()
        .fold(0u32, |hash, byte| hash.wrapping_mul(31).wrapping_add(u32::from(byte)))
}

/// Bucket a suspect name lands in
pub fn bucket_of(name: &str) -> usize {
    (hash_name(name) % BUCKETS as u32) as usize
}

#[derive(Debug)]
struct Association {
    clue: String,
    next: Option<Box<Association>>,
}

/// A suspect and every clue pointing at them
#[derive(Debug)]
pub struct Suspect {
    name: String,
    clue_count: usize,
    clues: Option<Box<Association>>,
    next: Option<Box<Suspect>>,
}

impl Suspect {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            clue_count: 0,
            clues: None,
            next: None,
        }
    }

    fn record(&mut self, clue: &str) {
        self.clues = Some(Box::new(Association {
            clue: clue.to_string(),
            next: self.clues.take(),
        }));
        self.clue_count += 1;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clue_count(&self) -> usize {
        self.clue_count
    }

    /// Attributed clues, most recent first
    pub fn clues(&self) -> Associations<'_> {
        Associations {
            cursor: self.clues.as_deref(),
        }
    }
}

impl Drop for Suspect {
    fn drop(&mut self) {
        let mut link = self.clues.take();
        while let Some(mut association) = link {
            link = association.next.take();
        }
        let mut chain = self.next.take();
        while let Some(mut suspect) = chain {
            chain = suspect.next.take();
        }
    }
}

/// Iterator over a suspect's clues
pub struct Associations<'a> {
    cursor: Option<&'a Association>,
}

impl<'a> Iterator for Associations<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let association = self.cursor?;
        self.cursor = association.next.as_deref();
        Some(association.clue.as_str())
    }
}

/// The suspect with the most clues
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub suspect: String,
    pub clue_count: usize,
}

/// Hash table of suspects
#[derive(Debug, Default)]
pub struct SuspectRegistry {
    buckets: [Option<Box<Suspect>>; BUCKETS],
}

impl SuspectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, name: &str) -> Option<&Suspect> {
        self.bucket(bucket_of(name)).find(|suspect| suspect.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Suspect> {
        let mut cursor = self.buckets[bucket_of(name)].as_deref_mut();
        while let Some(suspect) = cursor {
            if suspect.name == name {
                return Some(suspect);
            }
            cursor = suspect.next.as_deref_mut();
        }
        None
    }

    /// Attribute `clue` to `suspect`, registering the suspect on first sight
    ///
    /// Every call counts, including repeats of the same clue.
    pub fn attribute(&mut self, suspect: &str, clue: &str) {
        if let Some(known) = self.find_mut(suspect) {
            known.record(clue);
            tracing::debug!(suspect, clues = known.clue_count, "clue attributed");
            return;
        }

        let index = bucket_of(suspect);
        let mut fresh = Box::new(Suspect::new(suspect));
        fresh.record(clue);
        fresh.next = self.buckets[index].take();
        self.buckets[index] = Some(fresh);
        tracing::debug!(suspect, bucket = index, "new suspect registered");
    }

    /// Suspect with the strictly greatest clue count, first found wins ties
    ///
    /// `None` when no suspect has any clue.
    pub fn most_likely(&self) -> Option<Verdict> {
        let mut best: Option<&Suspect> = None;
        let mut max = 0;
        for suspect in self.iter() {
            if suspect.clue_count > max {
                max = suspect.clue_count;
                best = Some(suspect);
            }
        }
        best.map(|suspect| Verdict {
            suspect: suspect.name.clone(),
            clue_count: suspect.clue_count,
        })
    }

    /// One bucket chain, head to tail
    ///
    /// Out of range indices yield an empty chain.
    pub fn bucket(&self, index: usize) -> Chain<'_> {
        Chain {
            cursor: self.buckets.get(index).and_then(|head| head.as_deref()),
        }
    }

    /// Every suspect: buckets ascending, then each chain head to tail
    pub fn iter(&self) -> impl Iterator<Item = &Suspect> + '_ {
        (0..BUCKETS).flat_map(move |index| self.bucket(index))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Option::is_none)
    }
}

/// Iterator over one bucket chain
pub struct Chain<'a> {
    cursor: Option<&'a Suspect>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Suspect;

    fn next(&mut self) -> Option<Self::Item> {
        let suspect = self.cursor?;
        self.cursor = suspect.next.as_deref();
        Some(suspect)
    }
}
