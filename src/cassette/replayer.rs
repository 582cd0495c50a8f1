//! Replays recorded interactions from a cassette.

use std::collections::HashMap;

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Per port+method queue of interactions and the position of the next one.
#[derive(Debug, Default)]
struct Queue {
    interactions: Vec<Interaction>,
    cursor: usize,
}

/// Replays interactions from a loaded cassette, serving them sequentially
/// per port/method pair.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: HashMap<PortMethodKey, Queue>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, Queue> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            queues.entry(key).or_default().interactions.push(interaction.clone());
        }
        Self { queues }
    }

    /// Number of interactions not yet served, across all port/method pairs.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(|q| q.interactions.len() - q.cursor).sum()
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the given
    /// port/method combination, printing a clear error showing what was
    /// requested versus what interactions remain.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> &Interaction {
        let key = PortMethodKey { port: port.to_string(), method: method.to_string() };

        if !self.queues.contains_key(&key) {
            let available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        }

        let queue = self.queues.entry(key).or_default();
        assert!(
            queue.cursor < queue.interactions.len(),
            "Cassette exhausted: all {count} interactions for port={port:?} method={method:?} \
             have been consumed. Last interaction was seq={last_seq}.",
            count = queue.interactions.len(),
            last_seq = queue.interactions.last().map_or(0, |i| i.seq),
        );

        let index = queue.cursor;
        queue.cursor += 1;
        &queue.interactions[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn make_cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions,
        }
    }

    fn launch(seq: u64, flag: &str) -> Interaction {
        Interaction {
            seq,
            port: "process".into(),
            method: "launch".into(),
            input: json!({"argv": ["./sc", flag, "a.sim"], "stdin": false}),
            output: json!({"Ok": {"exit_code": 0, "stdout": flag, "stderr": ""}}),
        }
    }

    #[test]
    fn replays_launches_in_recorded_order() {
        let cassette = make_cassette(vec![launch(0, "-s"), launch(1, "-c"), launch(2, "-t")]);
        let mut replayer = CassetteReplayer::new(&cassette);
        assert_eq!(replayer.remaining(), 3);

        assert_eq!(replayer.next_interaction("process", "launch").seq, 0);
        assert_eq!(replayer.next_interaction("process", "launch").seq, 1);
        let last = replayer.next_interaction("process", "launch");
        assert_eq!(last.output["Ok"]["stdout"], "-t");
        assert_eq!(replayer.remaining(), 0);
    }

    #[test]
    fn keeps_independent_cursors_per_method() {
        let mut other = launch(1, "-c");
        other.method = "probe".into();
        let cassette = make_cassette(vec![launch(0, "-s"), other, launch(2, "-t")]);
        let mut replayer = CassetteReplayer::new(&cassette);

        assert_eq!(replayer.next_interaction("process", "launch").seq, 0);
        assert_eq!(replayer.next_interaction("process", "launch").seq, 2);
        assert_eq!(replayer.next_interaction("process", "probe").seq, 1);
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn exhausted_replayer_panics_with_descriptive_message() {
        let cassette = make_cassette(vec![launch(0, "-s")]);

        let mut replayer = CassetteReplayer::new(&cassette);
        let _ = replayer.next_interaction("process", "launch"); // consumes the only one
        let _ = replayer.next_interaction("process", "launch"); // should panic
    }

    #[test]
    #[should_panic(expected = "no interactions recorded")]
    fn unknown_port_panics() {
        let cassette = make_cassette(vec![]);
        let mut replayer = CassetteReplayer::new(&cassette);
        let _ = replayer.next_interaction("unknown", "method");
    }
}
