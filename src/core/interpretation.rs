/// Short meaning of a reduced number; empty for numbers outside the table.
pub fn interpretation(n: u64) -> &'static str {
    match n {
        1 => "Independence, initiative, leadership.",
        2 => "Cooperation, balance, diplomacy.",
        3 => "Creativity, expression, optimism.",
        4 => "Stability, discipline, practicality.",
        5 => "Change, adaptability, curiosity.",
        6 => "Responsibility, care, community.",
        7 => "Analysis, introspection, depth.",
        8 => "Ambition, material drive, management.",
        9 => "Compassion, service, broader vision.",
        11 => "Insight, inspiration, vision (Master 11).",
        22 => "Large-scale building, systems, pragmatism (Master 22).",
        33 => "Service-through-teaching, compassion-in-action (Master 33).",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_single_digit_and_master_has_text() {
        for n in (1..=9).chain([11, 22, 33]) {
            assert!(!interpretation(n).is_empty(), "missing text for {}", n);
        }
    }

    #[test]
    fn test_unknown_numbers_are_empty() {
        assert_eq!(interpretation(0), "");
        assert_eq!(interpretation(10), "");
        assert_eq!(interpretation(44), "");
    }
}
