use crate::models::ChoreItem;

const DEFAULT_CHORES: [(u32, &str, u32, &str, &str); 6] = [
    (1, "🦷 Brush Teeth (Morning)", 1, "🌅", "rose"),
    (2, "🦷 Brush Teeth (Night)", 1, "🌙", "violet"),
    (3, "🧹 Clean Up", 2, "✨", "amber"),
    (4, "🎒 Unpack Backpack", 1, "🏠", "teal"),
    (5, "🧸 Put Toys Away", 2, "📦", "sky"),
    (6, "🦷 Floss", 1, "🪥", "fuchsia"),
];

/// The built-in list used until a record has been loaded.
pub fn default_chores() -> Vec<ChoreItem> {
    DEFAULT_CHORES
        .iter()
        .map(|&(id, name, points, emoji, color)| ChoreItem {
            id,
            name: name.to_string(),
            points,
            completed: false,
            emoji: emoji.to_string(),
            color: color.to_string(),
        })
        .collect()
}

pub fn total_points(chores: &[ChoreItem]) -> u64 {
    chores
        .iter()
        .filter(|chore| chore.completed)
        .map(|chore| u64::from(chore.points))
        .sum()
}

pub fn max_points(chores: &[ChoreItem]) -> u64 {
    chores.iter().map(|chore| u64::from(chore.points)).sum()
}

pub fn all_completed(chores: &[ChoreItem]) -> bool {
    chores.iter().all(|chore| chore.completed)
}

/// Copy of `chores` with item `id` flipped, or `None` if no such item exists.
pub fn toggled(chores: &[ChoreItem], id: u32) -> Option<Vec<ChoreItem>> {
    if !chores.iter().any(|chore| chore.id == id) {
        return None;
    }

    Some(
        chores
            .iter()
            .map(|chore| {
                let mut chore = chore.clone();
                if chore.id == id {
                    chore.completed = !chore.completed;
                }
                chore
            })
            .collect(),
    )
}

pub fn reset(chores: &[ChoreItem]) -> Vec<ChoreItem> {
    chores
        .iter()
        .map(|chore| ChoreItem {
            completed: false,
            ..chore.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_completed(ids: &[u32]) -> Vec<ChoreItem> {
        let mut chores = default_chores();
        for chore in &mut chores {
            chore.completed = ids.contains(&chore.id);
        }
        chores
    }

    #[test]
    fn default_list_has_six_uncompleted_items() {
        let chores = default_chores();
        let points: Vec<u32> = chores.iter().map(|c| c.points).collect();
        assert_eq!(points, vec![1, 1, 2, 1, 2, 1]);
        assert!(chores.iter().all(|c| !c.completed));
        assert_eq!(max_points(&chores), 8);
        assert_eq!(total_points(&chores), 0);
    }

    #[test]
    fn brushing_teeth_twice_gives_two_points() {
        let chores = with_completed(&[1, 2]);
        assert_eq!(total_points(&chores), 2);
        assert!(!all_completed(&chores));
    }

    #[test]
    fn total_reaches_max_only_when_everything_is_done() {
        let ids: Vec<u32> = (1..=6).collect();
        for count in 0..=ids.len() {
            let chores = with_completed(&ids[..count]);
            assert!(total_points(&chores) <= max_points(&chores));
            assert_eq!(
                total_points(&chores) == max_points(&chores),
                all_completed(&chores),
                "completed {count} items"
            );
        }
        assert_eq!(total_points(&with_completed(&ids)), 8);
    }

    #[test]
    fn toggled_flips_only_the_target() {
        let chores = default_chores();
        let next = toggled(&chores, 3).unwrap();
        assert!(next[2].completed);
        assert_eq!(next.iter().filter(|c| c.completed).count(), 1);

        let back = toggled(&next, 3).unwrap();
        assert_eq!(back, chores);
    }

    #[test]
    fn toggled_unknown_id_is_none() {
        assert!(toggled(&default_chores(), 42).is_none());
    }

    #[test]
    fn reset_clears_completion_and_keeps_items() {
        let chores = with_completed(&[1, 3, 5]);
        let cleared = reset(&chores);
        assert_eq!(cleared, default_chores());
    }
}
