use crate::models::standings::TeamStanding;

/// Order standings for display: points first, then wins, then goal
/// difference, all descending. Teams that are still tied keep their
/// input order — there is no further tie-break rule.
///
/// The sort is the authoritative ordering for the league table; SQL
/// ORDER BY clauses on standings reads are only a stable pre-sort.
pub fn rank_standings(mut standings: Vec<TeamStanding>) -> Vec<TeamStanding> {
    standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.wins.cmp(&a.wins))
            .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
    });
    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn standing(points: i32, wins: i32, goals_for: i32, goals_against: i32) -> TeamStanding {
        TeamStanding {
            id: Uuid::new_v4(),
            tournament_id: Uuid::new_v4(),
            team_id: Uuid::new_v4(),
            matches_played: wins,
            wins,
            draws: 0,
            losses: 0,
            goals_for,
            goals_against,
            points,
            position: 1,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn orders_by_points_first() {
        let ranked = rank_standings(vec![standing(9, 3, 5, 2), standing(12, 4, 4, 4)]);
        assert_eq!(ranked[0].points, 12);
        assert_eq!(ranked[1].points, 9);
    }

    #[test]
    fn breaks_point_ties_on_wins() {
        let ranked = rank_standings(vec![standing(10, 2, 5, 2), standing(10, 3, 5, 2)]);
        assert_eq!(ranked[0].wins, 3);
    }

    #[test]
    fn breaks_remaining_ties_on_goal_difference() {
        let ranked = rank_standings(vec![standing(10, 3, 5, 2), standing(10, 3, 8, 3)]);
        assert_eq!(ranked[0].goal_difference(), 5);
        assert_eq!(ranked[1].goal_difference(), 3);
    }

    #[test]
    fn fully_tied_teams_keep_input_order() {
        let first = standing(7, 2, 4, 1);
        let second = standing(7, 2, 6, 3);
        let first_team = first.team_id;
        let second_team = second.team_id;

        let ranked = rank_standings(vec![first, second]);
        assert_eq!(ranked[0].team_id, first_team);
        assert_eq!(ranked[1].team_id, second_team);
    }

    #[test]
    fn empty_and_single_inputs_pass_through() {
        assert!(rank_standings(vec![]).is_empty());

        let only = standing(3, 1, 2, 0);
        let team_id = only.team_id;
        let ranked = rank_standings(vec![only]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].team_id, team_id);
    }

    #[test]
    fn ranking_is_idempotent_and_preserves_elements() {
        let input = vec![
            standing(10, 3, 5, 2),
            standing(10, 3, 8, 3),
            standing(12, 4, 4, 4),
            standing(9, 3, 1, 1),
        ];
        let mut input_ids: Vec<_> = input.iter().map(|s| s.team_id).collect();

        let once = rank_standings(input);
        let once_order: Vec<_> = once.iter().map(|s| s.team_id).collect();
        let twice = rank_standings(once);
        let twice_order: Vec<_> = twice.iter().map(|s| s.team_id).collect();

        assert_eq!(once_order, twice_order);

        let mut ranked_ids: Vec<_> = twice.iter().map(|s| s.team_id).collect();
        input_ids.sort();
        ranked_ids.sort();
        assert_eq!(input_ids, ranked_ids);
    }
}
