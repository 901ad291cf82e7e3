//! Decision heuristics for the bot.
//!
//! Three pure, deterministic decisions, all over read-only hand snapshots:
//!
//! - Draw source: take the visible discard when it feeds the strongest suit,
//!   starts a promising high-value suit, or beats the weakest held card;
//!   otherwise take the hidden deck card.
//! - Discard choice: keep a three-card suit whole, keep two close-scoring
//!   suits together, otherwise shed the cheapest card of the weakest suit.
//! - Knock: immediately on 31 or 25+, by direct comparison when enough of
//!   the opponent's hand has been seen, else against a pile-depth estimate
//!   of opponent strength with a margin that tightens as the round ages.
//!
//! Each policy is a priority list; the first matching branch wins.

use super::DrawSource;
use crate::card::{Card, HAND_SIZE, MAX_SCORE, Suit};
use crate::hand::Hand;

/// Lowest-ranked suit in the hand: fewest cards, ties to the lowest total.
fn weakest_suit(hand: &Hand) -> Option<Suit> {
    hand.suit_totals()
        .into_iter()
        .min_by_key(|&(suit, total)| (hand.suit_count(suit), total))
        .map(|(suit, _)| suit)
}

/// Cheapest card of the weakest suit, earliest in hand order on value ties.
fn weakest_card(hand: &Hand) -> Option<Card> {
    let suit = weakest_suit(hand)?;
    hand.cards()
        .iter()
        .filter(|card| card.suit == suit)
        .copied()
        .min_by_key(Card::value)
}

/// Index of the cheapest card matching `pred`, earliest on value ties.
fn lowest_value_index<P>(hand: &Hand, pred: P) -> Option<usize>
where
    P: Fn(&Card) -> bool,
{
    hand.cards()
        .iter()
        .enumerate()
        .filter(|&(_, card)| pred(card))
        .min_by_key(|&(_, card)| card.value())
        .map(|(index, _)| index)
}

/// Whether `candidate` improves on the weakest held card.
fn beats_weakest(hand: &Hand, candidate: Card) -> bool {
    let Some(weakest) = weakest_card(hand) else {
        return true;
    };
    let strongest = hand.best_suit();

    (strongest == Some(candidate.suit) && strongest != Some(weakest.suit))
        || (candidate.value() >= 10 && weakest.value() < 10)
        || (hand.suit_count(candidate.suit) >= 2 && hand.suit_count(weakest.suit) == 1)
        || (candidate.suit == weakest.suit && candidate.value() > weakest.value())
        || (hand.suit_total(weakest.suit) < 15 && candidate.value() >= 8)
}

/// Decides the turn's draw source given the visible top of the discard pile.
#[must_use]
pub fn prefer_discard(hand: &Hand, top: Option<Card>) -> DrawSource {
    let Some(top) = top else {
        return DrawSource::Deck;
    };
    if hand.is_empty() {
        return DrawSource::Discard;
    }
    if hand.best_suit() == Some(top.suit) {
        return DrawSource::Discard;
    }
    // A high card can seed a fresh suit worth building.
    if top.value() >= 10 && hand.suit_count(top.suit) < 2 {
        return DrawSource::Discard;
    }
    // Protect a strong hand: only a high card of the scoring suit is worth it.
    if hand.best_score() >= 25 {
        if hand.best_suit() == Some(top.suit) && top.value() >= 8 {
            return DrawSource::Discard;
        }
        return DrawSource::Deck;
    }
    if hand.len() == 4 {
        return if beats_weakest(hand, top) {
            DrawSource::Discard
        } else {
            DrawSource::Deck
        };
    }
    if (7..=9).contains(&top.value()) {
        return if hand.suit_count(top.suit) >= 1 {
            DrawSource::Discard
        } else {
            DrawSource::Deck
        };
    }
    if top.value() >= 10 {
        DrawSource::Discard
    } else {
        DrawSource::Deck
    }
}

/// Picks which card to shed from a post-draw hand.
#[must_use]
pub fn select_discard(hand: &Hand) -> usize {
    let totals = hand.suit_totals();

    // A suit holding three or more cards is kept whole; totals are ordered
    // by descending score, so the first match is the strongest such suit.
    let keeper = totals
        .iter()
        .map(|&(suit, _)| suit)
        .find(|&suit| hand.suit_count(suit) >= 3);
    if let Some(keeper) = keeper {
        if let Some(index) = lowest_value_index(hand, |card| card.suit != keeper) {
            return index;
        }
        // Every card shares the kept suit; shed its cheapest.
        if let Some(index) = lowest_value_index(hand, |_| true) {
            return index;
        }
    }

    // Two suits close in strength are kept together.
    if totals.len() >= 2 {
        let mut ranked = totals;
        ranked.sort_by(|a, b| {
            hand.suit_count(b.0)
                .cmp(&hand.suit_count(a.0))
                .then(b.1.cmp(&a.1))
        });
        let (first, second) = (ranked[0], ranked[1]);
        if first.1.abs_diff(second.1) <= 5 && hand.suit_count(second.0) >= 2 {
            if let Some(index) =
                lowest_value_index(hand, |card| card.suit != first.0 && card.suit != second.0)
            {
                return index;
            }
            // No third suit; shed the cheapest card of the weaker pair.
            if let Some(index) = lowest_value_index(hand, |card| card.suit == second.0) {
                return index;
            }
        }
    }

    if let Some(suit) = weakest_suit(hand) {
        if let Some(index) = lowest_value_index(hand, |card| card.suit == suit) {
            return index;
        }
    }
    0
}

/// Decides whether to end the round from a three-card hand.
///
/// `opponent_visible` is the opponent's cards seen at the deal that are still
/// in their hand; `pile_depth` stands in for round age when too little of
/// the opponent is known.
#[must_use]
pub fn should_knock(hand: &Hand, opponent_visible: &[Card], pile_depth: usize) -> bool {
    let best = hand.best_score();
    if best >= MAX_SCORE {
        return true;
    }
    if best >= 25 {
        return true;
    }

    if opponent_visible.len() >= HAND_SIZE - 1 {
        let visible_best = Hand::from(opponent_visible.to_vec()).best_score();
        return best >= visible_best + 1;
    }

    let estimate: u8 = if pile_depth > 3 { 21 } else { 19 };
    match pile_depth {
        depth if depth >= 6 => best >= estimate + 1,
        3..=5 => best >= estimate + 2,
        _ => best >= 26,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, rank)
    }

    fn hand(cards: &[Card]) -> Hand {
        Hand::from(cards.to_vec())
    }

    #[test]
    fn draws_from_deck_without_a_top_discard() {
        let h = hand(&[card(Suit::Hearts, 9)]);
        assert_eq!(prefer_discard(&h, None), DrawSource::Deck);
    }

    #[test]
    fn empty_hand_takes_any_discard() {
        let top = card(Suit::Clubs, 2);
        assert_eq!(prefer_discard(&Hand::new(), Some(top)), DrawSource::Discard);
    }

    #[test]
    fn takes_discard_matching_strongest_suit() {
        let h = hand(&[
            card(Suit::Hearts, 9),
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 2),
        ]);
        let top = card(Suit::Hearts, 3);
        assert_eq!(prefer_discard(&h, Some(top)), DrawSource::Discard);
    }

    #[test]
    fn takes_high_discard_to_seed_a_new_suit() {
        let h = hand(&[
            card(Suit::Hearts, 9),
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 2),
        ]);
        let top = card(Suit::Spades, 13);
        assert_eq!(prefer_discard(&h, Some(top)), DrawSource::Discard);
    }

    #[test]
    fn protects_a_strong_hand_from_off_suit_noise() {
        let h = hand(&[
            card(Suit::Hearts, 1),
            card(Suit::Hearts, 13),
            card(Suit::Hearts, 4),
        ]);
        let top = card(Suit::Spades, 6);
        assert_eq!(prefer_discard(&h, Some(top)), DrawSource::Deck);
    }

    #[test]
    fn four_card_hand_compares_against_weakest_card() {
        let h = hand(&[
            card(Suit::Spades, 1),
            card(Suit::Spades, 13),
            card(Suit::Hearts, 5),
            card(Suit::Hearts, 2),
        ]);
        // Hearts total 7 is under 15, so an 8+ candidate is an upgrade.
        assert_eq!(
            prefer_discard(&h, Some(card(Suit::Diamonds, 9))),
            DrawSource::Discard
        );
        assert_eq!(
            prefer_discard(&h, Some(card(Suit::Diamonds, 4))),
            DrawSource::Deck
        );
    }

    #[test]
    fn mid_value_discard_needs_a_card_of_its_suit() {
        let h = hand(&[
            card(Suit::Spades, 9),
            card(Suit::Clubs, 5),
            card(Suit::Clubs, 2),
        ]);
        assert_eq!(
            prefer_discard(&h, Some(card(Suit::Clubs, 8))),
            DrawSource::Discard
        );
        assert_eq!(
            prefer_discard(&h, Some(card(Suit::Hearts, 8))),
            DrawSource::Deck
        );
    }

    #[test]
    fn fallback_takes_tens_and_leaves_low_cards() {
        let h = hand(&[
            card(Suit::Clubs, 5),
            card(Suit::Clubs, 2),
            card(Suit::Spades, 9),
        ]);
        assert_eq!(
            prefer_discard(&h, Some(card(Suit::Clubs, 13))),
            DrawSource::Discard
        );
        assert_eq!(
            prefer_discard(&h, Some(card(Suit::Hearts, 4))),
            DrawSource::Deck
        );
    }

    #[test]
    fn discards_the_lone_off_suit_card() {
        let h = hand(&[
            card(Suit::Spades, 1),
            card(Suit::Spades, 13),
            card(Suit::Spades, 12),
            card(Suit::Hearts, 2),
        ]);
        assert_eq!(select_discard(&h), 3);
    }

    #[test]
    fn single_suit_hand_sheds_its_cheapest_card() {
        let h = hand(&[
            card(Suit::Spades, 1),
            card(Suit::Spades, 13),
            card(Suit::Spades, 12),
            card(Suit::Spades, 9),
        ]);
        assert_eq!(select_discard(&h), 3);
    }

    #[test]
    fn close_pairs_shed_from_the_weaker_pair() {
        let h = hand(&[
            card(Suit::Spades, 13),
            card(Suit::Spades, 5),
            card(Suit::Hearts, 12),
            card(Suit::Hearts, 6),
        ]);
        // Hearts 16 vs spades 15: both kept, the cheap spade goes.
        assert_eq!(select_discard(&h), 1);
    }

    #[test]
    fn distant_pairs_shed_from_the_weak_suit() {
        let h = hand(&[
            card(Suit::Spades, 1),
            card(Suit::Spades, 13),
            card(Suit::Hearts, 2),
            card(Suit::Hearts, 3),
        ]);
        assert_eq!(select_discard(&h), 2);
    }

    #[test]
    fn lone_cards_lose_to_the_pair() {
        let h = hand(&[
            card(Suit::Spades, 13),
            card(Suit::Spades, 5),
            card(Suit::Hearts, 12),
            card(Suit::Diamonds, 3),
        ]);
        assert_eq!(select_discard(&h), 3);
    }

    #[test]
    fn value_ties_resolve_to_the_earliest_card() {
        let h = hand(&[
            card(Suit::Hearts, 7),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 1),
            card(Suit::Spades, 13),
        ]);
        assert_eq!(select_discard(&h), 0);
    }

    #[test]
    fn knocks_unconditionally_on_31() {
        let h = hand(&[
            card(Suit::Hearts, 1),
            card(Suit::Hearts, 13),
            card(Suit::Hearts, 12),
        ]);
        assert!(should_knock(&h, &[], 0));
    }

    #[test]
    fn knocks_unconditionally_on_25_or_more() {
        let h = hand(&[
            card(Suit::Spades, 1),
            card(Suit::Spades, 13),
            card(Suit::Spades, 4),
        ]);
        assert!(should_knock(&h, &[], 0));
    }

    #[test]
    fn compares_directly_against_a_mostly_visible_opponent() {
        let h = hand(&[
            card(Suit::Spades, 13),
            card(Suit::Spades, 12),
            card(Suit::Hearts, 2),
        ]);
        let weak = [card(Suit::Hearts, 9), card(Suit::Hearts, 5)];
        assert!(should_knock(&h, &weak, 0));

        let strong = [card(Suit::Diamonds, 13), card(Suit::Diamonds, 12)];
        assert!(!should_knock(&h, &strong, 0));
    }

    #[test]
    fn deep_pile_loosens_the_estimate_margin() {
        let h22 = hand(&[
            card(Suit::Spades, 13),
            card(Suit::Spades, 12),
            card(Suit::Spades, 2),
        ]);
        assert!(should_knock(&h22, &[], 6));
        assert!(!should_knock(&h22, &[], 4));

        let h23 = hand(&[
            card(Suit::Spades, 13),
            card(Suit::Spades, 12),
            card(Suit::Spades, 3),
        ]);
        assert!(should_knock(&h23, &[], 4));
    }

    #[test]
    fn mid_round_uses_the_lower_estimate() {
        let h21 = hand(&[
            card(Suit::Spades, 1),
            card(Suit::Spades, 13),
            card(Suit::Hearts, 2),
        ]);
        assert!(should_knock(&h21, &[], 3));

        let h20 = hand(&[
            card(Suit::Spades, 13),
            card(Suit::Spades, 12),
            card(Suit::Hearts, 2),
        ]);
        assert!(!should_knock(&h20, &[], 3));
    }

    #[test]
    fn fresh_pile_never_knocks_below_26() {
        let h24 = hand(&[
            card(Suit::Spades, 13),
            card(Suit::Spades, 12),
            card(Suit::Spades, 4),
        ]);
        assert!(!should_knock(&h24, &[], 0));
        assert!(!should_knock(&h24, &[], 2));
    }
}
