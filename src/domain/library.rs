use super::video::Video;
use crate::errors::AppError;

/// The ordered in-memory list of videos for one session.
///
/// Insertion order is display order. Operations that address a video take
/// the 1-based number shown to the user.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Library {
    videos: Vec<Video>,
}

impl Library {
    pub fn new() -> Self {
        Self { videos: Vec::new() }
    }

    pub fn from_videos(videos: Vec<Video>) -> Self {
        Self { videos }
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Yields `(number, video)` pairs with 1-based numbers.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Video)> {
        self.videos.iter().enumerate().map(|(i, v)| (i + 1, v))
    }

    /// Maps a 1-based video number to its 0-based position.
    pub fn position(&self, index: i64) -> Result<usize, AppError> {
        let len = self.videos.len();

        match usize::try_from(index) {
            Ok(number) if (1..=len).contains(&number) => Ok(number - 1),
            _ => Err(AppError::InvalidIndex { index, len }),
        }
    }

    pub fn add_video(&mut self, video: Video) {
        self.videos.push(video);
    }

    /// Replaces the whole record at `index` and returns the previous one.
    pub fn update_video(&mut self, index: i64, video: Video) -> Result<Video, AppError> {
        let pos = self.position(index)?;
        Ok(std::mem::replace(&mut self.videos[pos], video))
    }

    pub fn delete_video(&mut self, index: i64) -> Result<Video, AppError> {
        let pos = self.position(index)?;
        Ok(self.videos.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Library {
        Library::from_videos(vec![
            Video::new("A", "1:00"),
            Video::new("B", "2:00"),
            Video::new("C", "3:00"),
        ])
    }

    #[test]
    fn add_appends_at_the_end() {
        let mut library = sample();
        let before = library.len();

        library.add_video(Video::new("D", "4:00"));

        assert_eq!(library.len(), before + 1);
        assert_eq!(library.videos().last(), Some(&Video::new("D", "4:00")));
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut library = Library::new();
        library.add_video(Video::new("A", "1:00"));
        library.add_video(Video::new("A", "1:00"));

        assert_eq!(library.len(), 2);
    }

    #[test]
    fn update_replaces_only_the_selected_video() -> Result<(), AppError> {
        let mut library = sample();

        let old = library.update_video(2, Video::new("B2", "2:30"))?;

        assert_eq!(old, Video::new("B", "2:00"));
        assert_eq!(
            library.videos(),
            &[
                Video::new("A", "1:00"),
                Video::new("B2", "2:30"),
                Video::new("C", "3:00"),
            ]
        );
        Ok(())
    }

    #[test]
    fn delete_keeps_remaining_order() -> Result<(), AppError> {
        let mut library = sample();

        let removed = library.delete_video(1)?;

        assert_eq!(removed, Video::new("A", "1:00"));
        assert_eq!(
            library.videos(),
            &[Video::new("B", "2:00"), Video::new("C", "3:00")]
        );
        Ok(())
    }

    #[test]
    fn out_of_range_numbers_are_rejected_without_mutation() {
        let mut library = sample();
        let untouched = library.clone();

        for index in [0, -1, 4, i64::MAX, i64::MIN] {
            assert!(matches!(
                library.delete_video(index),
                Err(AppError::InvalidIndex { len: 3, .. })
            ));
            assert!(library.update_video(index, Video::new("X", "0")).is_err());
        }

        assert_eq!(library, untouched);
    }

    #[test]
    fn empty_library_has_no_valid_position() {
        assert!(Library::new().position(1).is_err());
    }

    #[test]
    fn numbered_starts_at_one() {
        let library = sample();
        let numbers: Vec<usize> = library.numbered().map(|(n, _)| n).collect();

        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
