use fliplearn_types::{CardFace, CardView, WordPair};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStep {
    Advanced,
    /// Already on the last card
    Completed,
}

/// Flip-card walk over a fixed list of pairs
#[derive(Debug, Clone)]
pub struct ReviewSession {
    words: Vec<WordPair>,
    index: usize,
    face: CardFace,
    completed: bool,
}

impl ReviewSession {
    pub fn new(words: Vec<WordPair>) -> Result<Self, CoreError> {
        if words.is_empty() {
            return Err(CoreError::EmptyInput { field: "words" });
        }
        Ok(Self {
            words,
            index: 0,
            face: CardFace::Front,
            completed: false,
        })
    }

    pub fn current(&self) -> &WordPair {
        &self.words[self.index]
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    /// (1-based position, total)
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.words.len())
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn flip(&mut self) -> CardFace {
        self.face = match self.face {
            CardFace::Front => CardFace::Back,
            CardFace::Back => CardFace::Front,
        };
        self.face
    }

    pub fn next(&mut self) -> ReviewStep {
        self.face = CardFace::Front;
        if self.index + 1 < self.words.len() {
            self.index += 1;
            ReviewStep::Advanced
        } else {
            self.completed = true;
            ReviewStep::Completed
        }
    }

    /// Text on the visible face: translation in front, Turkish word behind
    pub fn visible_text(&self) -> &str {
        let card = self.current();
        match self.face {
            CardFace::Front => &card.translated_word,
            CardFace::Back => &card.turkish_word,
        }
    }

    pub fn view(&self) -> CardView {
        let (position, total) = self.position();
        CardView {
            position,
            total,
            face: self.face,
            text: self.visible_text().to_string(),
            completed: self.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fliplearn_types::ErrorKind;

    fn session() -> ReviewSession {
        ReviewSession::new(vec![
            WordPair::new("elma", "apple"),
            WordPair::new("armut", "pear"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_deck_is_rejected() {
        let err = ReviewSession::new(Vec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
    }

    #[test]
    fn test_flip_shows_turkish_side() {
        let mut review = session();
        assert_eq!(review.visible_text(), "apple");

        assert_eq!(review.flip(), CardFace::Back);
        assert_eq!(review.visible_text(), "elma");

        assert_eq!(review.flip(), CardFace::Front);
        assert_eq!(review.visible_text(), "apple");
    }

    #[test]
    fn test_next_unflips_and_completes_on_last_card() {
        let mut review = session();
        review.flip();

        assert_eq!(review.next(), ReviewStep::Advanced);
        assert_eq!(review.face(), CardFace::Front);
        assert_eq!(review.position(), (2, 2));
        assert!(!review.is_completed());

        assert_eq!(review.next(), ReviewStep::Completed);
        assert_eq!(review.position(), (2, 2));
        assert!(review.view().completed);
        assert_eq!(review.view().text, "pear");
    }
}
