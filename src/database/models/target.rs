use uuid::Uuid;

/// What a favorite or history row points at. The storage columns are a pair
/// of nullable foreign keys; this type is the enforced "exactly one" view the
/// rest of the service works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenTarget {
    Song(Uuid),
    Sermon(Uuid),
}

impl ListenTarget {
    /// Build from the raw column pair. Rejects rows/payloads that set both
    /// ids or neither.
    pub fn from_parts(
        song_id: Option<Uuid>,
        sermon_id: Option<Uuid>,
    ) -> Result<Self, &'static str> {
        match (song_id, sermon_id) {
            (Some(song), None) => Ok(ListenTarget::Song(song)),
            (None, Some(sermon)) => Ok(ListenTarget::Sermon(sermon)),
            (Some(_), Some(_)) => Err("exactly one of songId or sermonId may be set"),
            (None, None) => Err("one of songId or sermonId is required"),
        }
    }

    pub fn song_id(&self) -> Option<Uuid> {
        match self {
            ListenTarget::Song(id) => Some(*id),
            ListenTarget::Sermon(_) => None,
        }
    }

    pub fn sermon_id(&self) -> Option<Uuid> {
        match self {
            ListenTarget::Song(_) => None,
            ListenTarget::Sermon(id) => Some(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_song_when_only_song_set() {
        let id = Uuid::new_v4();
        assert_eq!(
            ListenTarget::from_parts(Some(id), None),
            Ok(ListenTarget::Song(id))
        );
    }

    #[test]
    fn picks_sermon_when_only_sermon_set() {
        let id = Uuid::new_v4();
        assert_eq!(
            ListenTarget::from_parts(None, Some(id)),
            Ok(ListenTarget::Sermon(id))
        );
    }

    #[test]
    fn rejects_both_set() {
        assert!(ListenTarget::from_parts(Some(Uuid::new_v4()), Some(Uuid::new_v4())).is_err());
    }

    #[test]
    fn rejects_neither_set() {
        assert!(ListenTarget::from_parts(None, None).is_err());
    }

    #[test]
    fn column_accessors_match_variant() {
        let id = Uuid::new_v4();
        let song = ListenTarget::Song(id);
        assert_eq!(song.song_id(), Some(id));
        assert_eq!(song.sermon_id(), None);

        let sermon = ListenTarget::Sermon(id);
        assert_eq!(sermon.song_id(), None);
        assert_eq!(sermon.sermon_id(), Some(id));
    }
}
