use shared::domain::PlayerId;

pub const MARKER_COUNT: usize = 7;

/// Visual token for one square value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub name: &'static str,
    /// Image served by the authority; `None` for markers drawn without an asset.
    pub asset: Option<&'static str>,
    pub glyph: char,
    pub rgb: [u8; 3],
}

impl Marker {
    const fn new(
        name: &'static str,
        asset: Option<&'static str>,
        glyph: char,
        rgb: [u8; 3],
    ) -> Self {
        Self {
            name,
            asset,
            glyph,
            rgb,
        }
    }
}

const EMPTY: Marker = Marker::new("empty", None, ' ', [235, 235, 235]);
const PLACEHOLDER: Marker = Marker::new("unknown", None, '?', [0, 0, 0]);

const STANDARD: [Marker; MARKER_COUNT] = [
    EMPTY,
    Marker::new("red", Some("/images/red.png"), '1', [214, 39, 40]),
    Marker::new("yellow", Some("/images/yellow.png"), '2', [240, 200, 20]),
    Marker::new("blue", Some("/images/blue.png"), '3', [31, 119, 180]),
    Marker::new("green", Some("/images/green.png"), '4', [44, 160, 44]),
    Marker::new("purple", Some("/images/purple.png"), '5', [148, 103, 189]),
    Marker::new("grey", Some("/images/grey.png"), '6', [127, 127, 127]),
];

/// Fixed lookup from square value (0 empty, 1..=6 players) to marker.
///
/// Built once at startup and handed to the renderers by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerTable {
    entries: [Marker; MARKER_COUNT],
    placeholder: Marker,
}

impl Default for MarkerTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl MarkerTable {
    pub fn standard() -> Self {
        Self {
            entries: STANDARD,
            placeholder: PLACEHOLDER,
        }
    }

    pub fn lookup(&self, value: i64) -> Option<&Marker> {
        usize::try_from(value)
            .ok()
            .and_then(|index| self.entries.get(index))
    }

    pub fn for_player(&self, player: PlayerId) -> Option<&Marker> {
        self.lookup(i64::from(player.0))
            .filter(|_| player.0 != 0)
    }

    pub fn empty(&self) -> &Marker {
        &self.entries[0]
    }

    pub fn placeholder(&self) -> &Marker {
        &self.placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_covers_empty_and_six_players() {
        let table = MarkerTable::standard();
        assert_eq!(table.lookup(0), Some(table.empty()));
        assert_eq!(table.lookup(1).map(|m| m.name), Some("red"));
        assert_eq!(table.lookup(6).map(|m| m.asset), Some(Some("/images/grey.png")));

        let names: std::collections::HashSet<_> =
            (1..=6).filter_map(|v| table.lookup(v)).map(|m| m.name).collect();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn values_outside_table_have_no_marker() {
        let table = MarkerTable::standard();
        assert_eq!(table.lookup(7), None);
        assert_eq!(table.lookup(-1), None);
        assert_eq!(table.for_player(PlayerId(0)), None);
        assert_eq!(table.placeholder().glyph, '?');
    }
}
