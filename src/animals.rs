use concat_string::concat_string;
use log::debug;

/// A pose an animal can strike under the bubble. Art literals keep their
/// leading newline so the blocks below stay lined up; `lines()` drops it.
/// A positive offset nudges the animal right of the bubble's center, a
/// negative one leans it left and widens the whole drawing's left margin.
pub struct Animal {
    pub offset: isize,
    art: &'static str,
}

impl Animal {
    pub fn lines(&self) -> impl Iterator<Item = &'static str> {
        self.art[1..].lines()
    }

    /// Width of the widest art line.
    pub fn width(&self) -> usize {
        self.lines().map(str::len).max().unwrap_or(0)
    }
}

const DEFAULT_COSTUME: &str = "yak";

static ANIMALS: &[(&str, Animal)] = &[
    (
        "yak",
        Animal {
            offset: 2,
            art: r"
(__)____
\../    |\
 -- VVVV
   || ||",
        },
    ),
    (
        "yak-dead",
        Animal {
            offset: 2,
            art: r"
(__)____
\xx/    |\
 -u VVVV
   || ||",
        },
    ),
    (
        "yak-surprised",
        Animal {
            offset: 2,
            art: r"
(__)____
\oo/    |\
 -- VVVV
   /\ /\",
        },
    ),
    (
        "monkey",
        Animal {
            offset: 1,
            art: r"
   __
 o(..)o
w (-)   w _)
 \_/ \_/ (
   (__)___)
   m  m",
        },
    ),
    (
        "monkey-dead",
        Animal {
            offset: 1,
            art: r"
   __
 o(xx)o
  (u)     _
   / \_  ( \
  /(__)\__)
   m  m",
        },
    ),
    (
        "monkey-surprised",
        Animal {
            offset: 1,
            art: r"
   __
 o(oo)o
W (O)   W /
 \_/ \_/ (
   (__)___)
   m  m",
        },
    ),
    (
        "seal",
        Animal {
            offset: -2,
            art: r"
      _
     /..
 ___/ =o=
/ ___V_)>
\/",
        },
    ),
    (
        "seal-dead",
        Animal {
            offset: -2,
            art: r"
      _
     /xx
 ___/ =u=
/ ___V_)>
\/",
        },
    ),
    (
        "seal-surprised",
        Animal {
            offset: -2,
            art: r"
      _
     /oo
/\__/ =o=
\____<_)>",
        },
    ),
];

/// Pick the pose for a costume. `roadkill` selects the "-dead" pose and wins
/// over `triggered`, which selects "-surprised". A key with no catalog entry
/// falls back to the plain costume, then to the default yak.
pub fn lookup(costume: &str, roadkill: bool, triggered: bool) -> &'static Animal {
    let suffix = if roadkill {
        "-dead"
    } else if triggered {
        "-surprised"
    } else {
        ""
    };
    if let Some(animal) = find(&concat_string!(costume, suffix)) {
        return animal;
    }
    if let Some(animal) = find(costume) {
        return animal;
    }
    debug!("no costume named {:?}, using {}", costume, DEFAULT_COSTUME);
    &ANIMALS[0].1
}

fn find(name: &str) -> Option<&'static Animal> {
    ANIMALS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, animal)| animal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_costume() {
        let monkey = lookup("monkey", false, false);
        assert_eq!(monkey.offset, 1);
        assert_eq!(monkey.lines().next(), Some("   __"));
    }

    #[test]
    fn test_leading_newline_stripped() {
        let yak = lookup("yak", false, false);
        assert_eq!(yak.lines().next(), Some("(__)____"));
    }

    #[test]
    fn test_width_spans_widest_line() {
        let yak = lookup("yak", false, false);
        assert_eq!(yak.width(), 10);
    }

    #[test]
    fn test_unknown_costume_falls_back_to_yak() {
        let fallback = lookup("walrus", false, false);
        assert!(std::ptr::eq(fallback, lookup("yak", false, false)));
    }

    #[test]
    fn test_roadkill_beats_triggered() {
        let both = lookup("yak", true, true);
        assert!(std::ptr::eq(both, lookup("yak", true, false)));
    }

    #[test]
    fn test_triggered_variant() {
        let seal = lookup("seal", false, true);
        assert_eq!(seal.lines().nth(1), Some("     /oo"));
    }

    #[test]
    fn test_unknown_costume_with_flag_lands_on_plain_default() {
        let fallback = lookup("walrus", true, false);
        assert!(std::ptr::eq(fallback, lookup("yak", false, false)));
    }
}
