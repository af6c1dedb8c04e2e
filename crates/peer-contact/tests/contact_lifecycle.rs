//! Contact lifecycle as seen by a routing-table collaborator:
//! announcement -> admission gate -> liveness updates -> snapshot -> restore.

use peer_contact::adapters::persistence::{contacts_from_json, contacts_to_json};
use peer_contact::{
    contact_from_announcement, Contact, ContactConfig, ContactError, ContactParams, TimeSource,
    Timestamp,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

/// Clock shared between the "transport" and the test body.
#[derive(Default)]
struct SteppingClock(AtomicU64);

impl SteppingClock {
    fn at(millis: u64) -> Self {
        Self(AtomicU64::new(millis))
    }

    fn advance(&self, millis: u64) {
        self.0.fetch_add(millis, Ordering::SeqCst);
    }
}

impl TimeSource for SteppingClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.0.load(Ordering::SeqCst))
    }
}

/// Minimal stand-in for a routing table: admits only valid contacts.
#[derive(Default)]
struct Table {
    contacts: HashMap<String, Arc<Contact>>,
}

impl Table {
    fn admit(&mut self, contact: Contact) -> bool {
        if !contact.is_valid() {
            return false;
        }
        self.contacts
            .insert(contact.node_id().as_str().to_owned(), Arc::new(contact));
        true
    }

    fn stale(&self, now: Timestamp, config: &ContactConfig) -> Vec<String> {
        let mut ids: Vec<_> = self
            .contacts
            .iter()
            .filter(|(_, c)| c.is_stale(now, config))
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }
}

#[test]
fn test_announcements_gate_on_validity() {
    let clock = SteppingClock::at(1_000);
    let mut table = Table::default();

    let announcements = [
        json!({ "address": "10.0.0.1", "port": 1337 }),
        json!({ "address": "10.0.0.2", "port": 0 }),
        json!({ "address": "10.0.0.3", "port": 65536 }),
        json!({ "port": 1337 }),
        json!({ "address": "10.0.0.5" }),
    ];

    let mut admitted = 0;
    let mut errors = Vec::new();
    for announcement in &announcements {
        match contact_from_announcement(announcement, &clock) {
            Ok(contact) => admitted += usize::from(table.admit(contact)),
            Err(e) => errors.push(e),
        }
    }

    assert_eq!(admitted, 1);
    assert_eq!(
        errors,
        vec![ContactError::InvalidAddress, ContactError::InvalidPort]
    );
}

#[test]
fn test_liveness_drives_staleness() {
    let clock = SteppingClock::at(0);
    let config = ContactConfig::for_testing();
    let mut table = Table::default();

    let quiet = Contact::create_with_clock(ContactParams::new("10.0.0.1", 4000), &clock).unwrap();
    let chatty = Contact::create_with_clock(ContactParams::new("10.0.0.2", 4000), &clock).unwrap();
    let quiet_id = quiet.node_id().as_str().to_owned();
    let chatty_id = chatty.node_id().as_str().to_owned();
    assert!(table.admit(quiet));
    assert!(table.admit(chatty));

    clock.advance(800);
    table.contacts[&chatty_id].seen_with(&clock);
    clock.advance(800);

    assert_eq!(table.stale(clock.now(), &config), vec![quiet_id]);
}

#[test]
fn test_transport_and_table_share_contact() {
    let clock = Arc::new(SteppingClock::at(10));
    let contact = Arc::new(
        Contact::create_with_clock(ContactParams::new("10.0.0.7", 30303), clock.as_ref()).unwrap(),
    );

    let transport = {
        let contact = Arc::clone(&contact);
        let clock = Arc::clone(&clock);
        thread::spawn(move || {
            for _ in 0..500 {
                clock.advance(1);
                contact.seen_with(clock.as_ref());
            }
        })
    };

    let mut previous = contact.last_seen();
    while !transport.is_finished() {
        let current = contact.last_seen();
        assert!(current >= previous);
        previous = current;
    }
    transport.join().unwrap();

    assert_eq!(contact.last_seen().as_millis(), 510);
}

#[test]
fn test_snapshot_restore_does_not_refresh_liveness() {
    let clock = SteppingClock::at(50_000);
    let contacts = vec![
        Contact::create_with_clock(ContactParams::new("127.0.0.1", 1337), &clock).unwrap(),
        Contact::create_with_clock(
            ContactParams::new("127.0.0.1", 1338).with_node_id("0f".repeat(20)),
            &clock,
        )
        .unwrap(),
    ];

    let snapshot = contacts_to_json(&contacts).unwrap();
    clock.advance(3_600_000);
    let restored = contacts_from_json(&snapshot).unwrap();

    assert_eq!(restored, contacts);
    assert!(restored.iter().all(|c| c.last_seen().as_millis() == 50_000));
    assert_eq!(restored[1].node_id().as_str(), "0f".repeat(20));
}
