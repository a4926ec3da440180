use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::{Card, Rank};
use crate::errors::HandError;

/// Number of cards in an evaluated hand.
pub const HAND_SIZE: usize = 5;

/// The ten hand categories, weakest first. The derived ordering is the
/// strength ordering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// Every category in ascending strength.
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
            Category::RoyalFlush => "royal flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a comparison, seen from the hand that asked.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same result seen from the rival's side.
    pub fn inverse(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Draw => "draw",
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Lose,
            Ordering::Equal => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Facts about a rank-sorted hand that the category table reads.
#[derive(Debug, Clone, Copy)]
struct Shape {
    flush: bool,
    straight: bool,
    wheel: bool,
    top: Rank,
    // rank multiplicities, largest first, zero padded
    pattern: [u8; HAND_SIZE],
}

impl Shape {
    fn of(sorted: &[Card; HAND_SIZE]) -> Self {
        let flush = sorted.iter().all(|c| c.suit == sorted[0].suit);
        let ace_low = is_ace_low(sorted);
        // A wheel skips the leading Ace and checks Five..Deuce.
        let run = if ace_low { &sorted[1..] } else { &sorted[..] };
        let straight = run
            .windows(2)
            .all(|w| w[0].rank.value() == w[1].rank.value() + 1);

        let mut pattern = [0u8; HAND_SIZE];
        for (slot, group) in pattern.iter_mut().zip(rank_groups(sorted)) {
            *slot = group.len() as u8;
        }

        Self {
            flush,
            straight,
            wheel: ace_low && straight,
            top: sorted[0].rank,
            pattern,
        }
    }
}

struct Detector {
    category: Category,
    matches: fn(&Shape) -> bool,
}

// Strongest first; the first match wins and anything unmatched is HighCard.
const DETECTORS: [Detector; 9] = [
    Detector {
        category: Category::RoyalFlush,
        matches: |s: &Shape| s.flush && s.straight && !s.wheel && s.top == Rank::Ace,
    },
    Detector {
        category: Category::StraightFlush,
        matches: |s: &Shape| s.flush && s.straight,
    },
    Detector {
        category: Category::Flush,
        matches: |s: &Shape| s.flush,
    },
    Detector {
        category: Category::Straight,
        matches: |s: &Shape| s.straight,
    },
    Detector {
        category: Category::FourOfAKind,
        matches: |s: &Shape| s.pattern[0] == 4,
    },
    Detector {
        category: Category::FullHouse,
        matches: |s: &Shape| s.pattern[0] == 3 && s.pattern[1] == 2,
    },
    Detector {
        category: Category::ThreeOfAKind,
        matches: |s: &Shape| s.pattern[0] == 3,
    },
    Detector {
        category: Category::TwoPair,
        matches: |s: &Shape| s.pattern[0] == 2 && s.pattern[1] == 2,
    },
    Detector {
        category: Category::OnePair,
        matches: |s: &Shape| s.pattern[0] == 2,
    },
];

fn is_ace_low(sorted: &[Card; HAND_SIZE]) -> bool {
    sorted[0].rank == Rank::Ace && sorted[1].rank == Rank::Five
}

/// Stable sort by rank, highest first.
pub fn sort_by_rank(mut cards: [Card; HAND_SIZE]) -> [Card; HAND_SIZE] {
    cards.sort_by(|a, b| b.rank.cmp(&a.rank));
    cards
}

/// Cards of equal rank grouped together, larger groups first and higher
/// ranks first among groups of the same size.
fn rank_groups(sorted: &[Card; HAND_SIZE]) -> Vec<&[Card]> {
    let mut groups: Vec<&[Card]> = sorted.chunk_by(|a, b| a.rank == b.rank).collect();
    groups.sort_by(|a, b| b.len().cmp(&a.len()));
    groups
}

fn classify_sorted(sorted: &[Card; HAND_SIZE]) -> Category {
    let shape = Shape::of(sorted);
    DETECTORS
        .iter()
        .find(|d| (d.matches)(&shape))
        .map_or(Category::HighCard, |d| d.category)
}

/// Category of five cards in any order.
pub fn classify(cards: &[Card; HAND_SIZE]) -> Category {
    classify_sorted(&sort_by_rank(*cards))
}

/// Rearranges rank-sorted cards so that each index holds the card compared
/// at that tie-break step for `category`.
///
/// - straights keep descending order, except the wheel which moves its Ace last
/// - quads, full houses, trips, two pair and one pair list the largest rank
///   group first, then smaller groups, kickers descending at the end
/// - high card, flush and royal flush are already canonical when sorted
pub fn canonical_order(category: Category, sorted: &[Card; HAND_SIZE]) -> [Card; HAND_SIZE] {
    match category {
        Category::Straight | Category::StraightFlush if is_ace_low(sorted) => {
            [sorted[1], sorted[2], sorted[3], sorted[4], sorted[0]]
        }
        Category::FourOfAKind
        | Category::FullHouse
        | Category::ThreeOfAKind
        | Category::TwoPair
        | Category::OnePair => {
            let mut ordered = *sorted;
            for (slot, card) in ordered
                .iter_mut()
                .zip(rank_groups(sorted).into_iter().flatten())
            {
                *slot = *card;
            }
            ordered
        }
        Category::HighCard
        | Category::Straight
        | Category::Flush
        | Category::StraightFlush
        | Category::RoyalFlush => *sorted,
    }
}

/// Positions compared, in order, once two hands share a category.
pub fn tie_break_indices(category: Category) -> &'static [usize] {
    match category {
        Category::Straight | Category::StraightFlush | Category::RoyalFlush => &[0],
        Category::FourOfAKind => &[0, 4],
        Category::FullHouse => &[0, 3],
        Category::ThreeOfAKind => &[0, 3, 4],
        // index 1 repeats the top pair
        Category::TwoPair => &[0, 2, 4],
        Category::OnePair => &[0, 2, 3, 4],
        Category::Flush | Category::HighCard => &[0, 1, 2, 3, 4],
    }
}

/// Classifies five cards and freezes them in canonical order.
pub fn classify_and_order(cards: [Card; HAND_SIZE]) -> Hand {
    let sorted = sort_by_rank(cards);
    let category = classify_sorted(&sorted);
    let hand = Hand {
        category,
        cards: canonical_order(category, &sorted),
    };
    debug!(category = %category, cards = %hand, "classified hand");
    hand
}

/// An evaluated five-card hand. The category is computed once at
/// construction and the cards are stored in canonical tie-break order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct Hand {
    category: Category,
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Evaluates exactly five distinct cards.
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let five: [Card; HAND_SIZE] = cards.try_into().map_err(|_| HandError::WrongCardCount {
            expected: HAND_SIZE,
            actual: cards.len(),
        })?;
        let mut seen = HashSet::with_capacity(HAND_SIZE);
        if let Some(dup) = five.iter().find(|c| !seen.insert(**c)) {
            return Err(HandError::DuplicateCard(*dup));
        }
        Ok(classify_and_order(five))
    }

    /// Parses whitespace-separated card text such as `"As Ks Qs Js Ts"`.
    pub fn parse(text: &str) -> Result<Self, HandError> {
        let cards = text
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Hand::new(&cards)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Cards in canonical tie-break order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn compare(&self, rival: &Hand) -> Outcome {
        let outcome = Outcome::from(self.cmp_strength(rival));
        trace!(hand = %self, rival = %rival, outcome = %outcome, "compared hands");
        outcome
    }

    /// Category first, then ranks at the category's tie-break indices.
    pub fn cmp_strength(&self, rival: &Hand) -> Ordering {
        self.category.cmp(&rival.category).then_with(|| {
            tie_break_indices(self.category)
                .iter()
                .map(|&i| self.cards[i].rank.cmp(&rival.cards[i].rank))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::new(&cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::parse(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
