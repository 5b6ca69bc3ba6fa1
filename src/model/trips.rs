//! Trip records and the session-scoped trip list.

use uuid::Uuid;

use crate::model::palette::PaletteColor;

// ── Trip ───────────────────────────────────────────────────────────────────────

/// A single travel-destination record.
///
/// Identity is assigned at construction and never reused. Trips are immutable
/// once created; the app has no edit or delete operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub id: Uuid,
    pub title: String,
    pub color: PaletteColor,
}

impl Trip {
    pub fn new(title: impl Into<String>, color: PaletteColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            color,
        }
    }
}

// ── Trip list ──────────────────────────────────────────────────────────────────

/// Ordered collection of trips, newest first. Lives in memory for the length
/// of the session; nothing is persisted.
#[derive(Debug, Default)]
pub struct TripList {
    trips: Vec<Trip>,
}

impl TripList {
    /// The three destinations every session starts with.
    pub fn seeded() -> Self {
        Self {
            trips: vec![
                Trip::new("Paris", PaletteColor::TealGreen),
                Trip::new("New York", PaletteColor::DuckBlue),
                Trip::new("Rome", PaletteColor::Turquoise),
            ],
        }
    }

    /// Insert at the front: the newest trip renders at the top of the screen.
    pub fn add(&mut self, trip: Trip) {
        self.trips.insert(0, trip);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

// ── Add-trip draft ─────────────────────────────────────────────────────────────

/// Local draft state for the add-trip form. A fresh draft is constructed for
/// every presentation of the form window.
#[derive(Debug, Clone, Default)]
pub struct TripDraft {
    pub title: String,
    pub color: PaletteColor,
}

impl TripDraft {
    /// Build the trip, or `None` when the title is empty. The check is on the
    /// raw string, without trimming: an all-whitespace title still saves.
    pub fn commit(&self) -> Option<Trip> {
        if self.title.is_empty() {
            return None;
        }
        Some(Trip::new(self.title.clone(), self.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seeded_list_order_and_colors() {
        let trips = TripList::seeded();
        let titles: Vec<&str> = trips.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Paris", "New York", "Rome"]);
        let colors: Vec<PaletteColor> = trips.iter().map(|t| t.color).collect();
        assert_eq!(
            colors,
            [
                PaletteColor::TealGreen,
                PaletteColor::DuckBlue,
                PaletteColor::Turquoise,
            ]
        );
    }

    #[test]
    fn add_prepends_the_new_trip() {
        let mut trips = TripList::seeded();
        trips.add(Trip::new("Tokyo", PaletteColor::LightBlue));
        assert_eq!(trips.len(), 4);
        let titles: Vec<&str> = trips.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Tokyo", "Paris", "New York", "Rome"]);
    }

    #[test]
    fn every_confirmation_adds_exactly_one_at_the_front() {
        let mut trips = TripList::seeded();
        for (i, title) in ["Tokyo", "Oslo", "Quito"].iter().enumerate() {
            let draft = TripDraft {
                title: (*title).into(),
                color: PaletteColor::DuckBlue,
            };
            trips.add(draft.commit().expect("non-empty title"));
            assert_eq!(trips.len(), 4 + i);
            assert_eq!(trips.iter().next().expect("non-empty list").title, *title);
        }

        let ids: HashSet<Uuid> = trips.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), trips.len());
    }

    #[test]
    fn ids_are_unique_even_for_identical_trips() {
        let a = Trip::new("Lisbon", PaletteColor::Turquoise);
        let b = Trip::new("Lisbon", PaletteColor::Turquoise);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn empty_title_produces_no_trip() {
        assert!(TripDraft::default().commit().is_none());
    }

    #[test]
    fn whitespace_only_title_still_saves() {
        let draft = TripDraft {
            title: "   ".into(),
            ..Default::default()
        };
        assert!(draft.commit().is_some());
    }

    #[test]
    fn commit_uses_the_entered_title_and_selected_color() {
        let draft = TripDraft {
            title: "Tokyo".into(),
            color: PaletteColor::LightBlue,
        };
        let trip = draft.commit().expect("non-empty title");
        assert_eq!(trip.title, "Tokyo");
        assert_eq!(trip.color, PaletteColor::LightBlue);
    }
}
