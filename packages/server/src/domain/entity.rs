//! Room and player entities: the game state machine.
//!
//! Every transition mutates the [`Room`] in place and returns the events that must be
//! broadcast to the room afterwards. Nothing here touches the transport, so the whole
//! state machine is testable without sockets.

use std::collections::HashMap;

use super::{
    CategoryCatalog, ConnectionId, GameEvent, GameRules, JoinRejection, PlayerName,
    RoomId, RoomInstanceId, Scores, Shuffler, StartRoundRejection, Timestamp,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub connection_id: ConnectionId,
    pub name: PlayerName,
}

impl Player {
    pub fn new(connection_id: ConnectionId, name: PlayerName) -> Self {
        Self {
            connection_id,
            name,
        }
    }
}

/// Latest result of a player's guess in the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub correct: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomPhase {
    /// Waiting for a round to be started; joins are accepted
    Lobby,
    /// A round is running; `items` and `answer` are live
    RoundInProgress,
    /// Game over; waiting for the cleanup timer
    Finished,
}

impl RoomPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomPhase::Lobby => "lobby",
            RoomPhase::RoundInProgress => "roundInProgress",
            RoomPhase::Finished => "finished",
        }
    }
}

/// Result of scoring one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// No round running, or the name is not a player of this room
    Ignored,
    /// Scored but not a perfect match
    Scored(Vec<GameEvent>),
    /// Perfect match; the game continues
    RoundWon(Vec<GameEvent>),
    /// Perfect match that ended the game; the room must be scheduled for cleanup
    GameOver(Vec<GameEvent>),
}

impl SubmissionOutcome {
    pub fn events(&self) -> &[GameEvent] {
        match self {
            SubmissionOutcome::Ignored => &[],
            SubmissionOutcome::Scored(events)
            | SubmissionOutcome::RoundWon(events)
            | SubmissionOutcome::GameOver(events) => events,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub instance: RoomInstanceId,
    pub created_at: Timestamp,
    players: Vec<Player>,
    category_order: Vec<String>,
    round_index: usize,
    scores: Scores,
    submissions: HashMap<PlayerName, Submission>,
    category: Option<String>,
    items: Vec<String>,
    answer: Vec<String>,
    phase: RoomPhase,
}

impl Room {
    pub fn new(
        id: RoomId,
        instance: RoomInstanceId,
        category_order: Vec<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            instance,
            created_at,
            players: Vec::new(),
            category_order,
            round_index: 0,
            scores: Scores::new(),
            submissions: HashMap::new(),
            category: None,
            items: Vec::new(),
            answer: Vec::new(),
            phase: RoomPhase::Lobby,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_names(&self) -> Vec<PlayerName> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    pub fn connection_ids(&self) -> Vec<ConnectionId> {
        self.players.iter().map(|p| p.connection_id).collect()
    }

    pub fn has_connection(&self, connection_id: &ConnectionId) -> bool {
        self.players
            .iter()
            .any(|p| &p.connection_id == connection_id)
    }

    pub fn category_order(&self) -> &[String] {
        &self.category_order
    }

    pub fn round_index(&self) -> usize {
        self.round_index
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Score of `name`; players without an entry count as zero.
    pub fn score_of(&self, name: &PlayerName) -> u32 {
        self.scores.get(name).copied().unwrap_or(0)
    }

    pub fn submission_of(&self, name: &PlayerName) -> Option<Submission> {
        self.submissions.get(name).copied()
    }

    pub fn current_category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn answer(&self) -> &[String] {
        &self.answer
    }

    pub fn phase(&self) -> RoomPhase {
        self.phase
    }

    pub fn is_game_started(&self) -> bool {
        self.phase == RoomPhase::RoundInProgress
    }

    /// Terminal once the round limit is reached, somebody hit the winning score, or the
    /// room ran out of categories.
    pub fn is_terminal(&self, rules: &GameRules) -> bool {
        self.phase == RoomPhase::Finished
            || self.round_index >= rules.max_rounds
            || self.round_index >= self.category_order.len()
            || self.scores.values().any(|&s| s >= rules.winning_score)
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Seat `name` on `connection_id`.
    ///
    /// A connection that is already seated keeps its seat; the state is re-broadcast.
    pub fn join(
        &mut self,
        connection_id: ConnectionId,
        name: PlayerName,
        rules: &GameRules,
    ) -> Result<Vec<GameEvent>, JoinRejection> {
        if self.is_game_started() {
            return Err(JoinRejection::RoundInProgress);
        }
        if self.is_terminal(rules) {
            return Err(JoinRejection::GameOver);
        }

        if !self.has_connection(&connection_id) {
            if self.players.iter().any(|p| p.name == name) {
                return Err(JoinRejection::NameTaken(name.into_string()));
            }
            self.scores.entry(name.clone()).or_insert(0);
            self.players.push(Player::new(connection_id, name));
        }

        Ok(vec![self.state_sync()])
    }

    /// Start the next round.
    ///
    /// Starting a finished game, or a round that is already running, is a silent no-op
    /// and yields no events.
    pub fn start_round(
        &mut self,
        catalog: &CategoryCatalog,
        shuffler: &Shuffler,
        rules: &GameRules,
    ) -> Result<Vec<GameEvent>, StartRoundRejection> {
        if self.players.len() < rules.min_players {
            return Err(StartRoundRejection::NotEnoughPlayers {
                required: rules.min_players,
            });
        }
        if self.is_terminal(rules) || self.is_game_started() {
            return Ok(Vec::new());
        }

        let Some(category) = self.category_order.get(self.round_index).cloned() else {
            return Ok(Vec::new());
        };
        let Some(all_items) = catalog.items(&category) else {
            return Ok(Vec::new());
        };

        let items = shuffler.shuffled(all_items);
        let answer = shuffler.shuffled(&items);

        self.phase = RoomPhase::RoundInProgress;
        self.category = Some(category.clone());
        self.items = items.clone();
        self.answer = answer;
        self.submissions.clear();

        Ok(vec![GameEvent::RoundStarted {
            items,
            category,
            scores: self.scores.clone(),
            current_round: self.round_index + 1,
            players: self.player_names(),
        }])
    }

    /// Score `order` for `player` against the hidden answer.
    pub fn submit(
        &mut self,
        player: &PlayerName,
        order: &[String],
        rules: &GameRules,
    ) -> SubmissionOutcome {
        if !self.is_game_started() || !self.players.iter().any(|p| &p.name == player) {
            return SubmissionOutcome::Ignored;
        }

        let total = self.answer.len();
        let correct_count = count_correct(&self.answer, order);
        self.submissions.insert(
            player.clone(),
            Submission {
                correct: correct_count,
            },
        );

        let mut events = vec![GameEvent::Feedback {
            player: player.clone(),
            correct_count,
            total,
        }];

        if total == 0 || correct_count != total {
            return SubmissionOutcome::Scored(events);
        }

        *self.scores.entry(player.clone()).or_insert(0) += 1;
        events.push(GameEvent::RoundWon {
            scores: self.scores.clone(),
            winners: vec![player.clone()],
            round_number: self.round_index + 1,
            answer: self.answer.clone(),
        });

        self.round_index += 1;
        self.phase = RoomPhase::Lobby;

        if self.is_terminal(rules) {
            self.phase = RoomPhase::Finished;
            events.push(GameEvent::GameEnded {
                scores: self.scores.clone(),
                final_winners: self.leaders(),
            });
            SubmissionOutcome::GameOver(events)
        } else {
            events.push(GameEvent::EnableStartNext);
            SubmissionOutcome::RoundWon(events)
        }
    }

    /// Drop the player seated on `connection_id`.
    ///
    /// Returns `None` when the connection is not seated here. A round left without any
    /// player is abandoned and the room goes back to the lobby; `round_index` is kept.
    pub fn remove_player(&mut self, connection_id: &ConnectionId) -> Option<Vec<GameEvent>> {
        let position = self
            .players
            .iter()
            .position(|p| &p.connection_id == connection_id)?;
        let player = self.players.remove(position);
        self.scores.remove(&player.name);
        self.submissions.remove(&player.name);

        if self.players.is_empty() && self.is_game_started() {
            self.phase = RoomPhase::Lobby;
            self.category = None;
            self.items.clear();
            self.answer.clear();
            self.submissions.clear();
        }

        Some(vec![self.state_sync()])
    }

    fn state_sync(&self) -> GameEvent {
        GameEvent::StateSync {
            players: self.player_names(),
            scores: self.scores.clone(),
        }
    }

    /// Every player holding the maximum score, in join order
    fn leaders(&self) -> Vec<PlayerName> {
        let Some(max) = self.scores.values().copied().max() else {
            return Vec::new();
        };
        self.players
            .iter()
            .filter(|p| self.score_of(&p.name) == max)
            .map(|p| p.name.clone())
            .collect()
    }
}

/// Number of positions where `order` holds the same item as `answer`.
///
/// Positions missing from a short `order` count as wrong; extra trailing items are ignored.
pub fn count_correct(answer: &[String], order: &[String]) -> usize {
    answer
        .iter()
        .enumerate()
        .filter(|(i, expected)| order.get(*i) == Some(*expected))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(value: &str) -> PlayerName {
        PlayerName::new(value.to_string()).unwrap()
    }

    fn create_test_room() -> Room {
        Room::new(
            RoomId::new("R1".to_string()).unwrap(),
            RoomInstanceId::generate(),
            CategoryCatalog::builtin().names(),
            Timestamp::new(0),
        )
    }

    /// Room with `names` seated, each on a fresh connection
    fn create_room_with_players(names: &[&str]) -> (Room, Vec<ConnectionId>) {
        let mut room = create_test_room();
        let rules = GameRules::default();
        let connections: Vec<ConnectionId> = names
            .iter()
            .map(|n| {
                let connection_id = ConnectionId::generate();
                room.join(connection_id, name(n), &rules).unwrap();
                connection_id
            })
            .collect();
        (room, connections)
    }

    fn start(room: &mut Room) -> Vec<GameEvent> {
        room.start_round(
            &CategoryCatalog::builtin(),
            &Shuffler::new(Some(3)),
            &GameRules::default(),
        )
        .unwrap()
    }

    /// Let `winner` take the current round with a perfect guess
    fn win_round(room: &mut Room, winner: &str) -> SubmissionOutcome {
        start(room);
        let answer = room.answer().to_vec();
        room.submit(&name(winner), &answer, &GameRules::default())
    }

    #[test]
    fn test_join_adds_player_and_zero_score() {
        // テスト項目: 参加すると players に追加され、スコアが 0 で初期化される
        // given (前提条件):
        let mut room = create_test_room();
        let rules = GameRules::default();

        // when (操作):
        let events = room
            .join(ConnectionId::generate(), name("Ali"), &rules)
            .unwrap();

        // then (期待する結果):
        assert_eq!(room.player_names(), vec![name("Ali")]);
        assert_eq!(room.score_of(&name("Ali")), 0);
        assert_eq!(
            events,
            vec![GameEvent::StateSync {
                players: vec![name("Ali")],
                scores: Scores::from([(name("Ali"), 0)]),
            }]
        );
    }

    #[test]
    fn test_join_keeps_insertion_order() {
        // テスト項目: players は参加順に並ぶ
        // given (前提条件):

        // when (操作):
        let (room, _) = create_room_with_players(&["Sara", "Ali", "Omar"]);

        // then (期待する結果):
        assert_eq!(
            room.player_names(),
            vec![name("Sara"), name("Ali"), name("Omar")]
        );
    }

    #[test]
    fn test_rejoin_from_same_connection_does_not_duplicate() {
        // テスト項目: 同じ接続からの再参加では players が重複しない
        // given (前提条件):
        let (mut room, connections) = create_room_with_players(&["Ali"]);

        // when (操作):
        let result = room.join(connections[0], name("Ali"), &GameRules::default());

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(room.players().len(), 1);
    }

    #[test]
    fn test_join_with_taken_name_is_rejected() {
        // テスト項目: 他の接続が使っている名前での参加は拒否される
        // given (前提条件):
        let (mut room, _) = create_room_with_players(&["Ali"]);

        // when (操作):
        let result = room.join(ConnectionId::generate(), name("Ali"), &GameRules::default());

        // then (期待する結果):
        assert_eq!(result, Err(JoinRejection::NameTaken("Ali".to_string())));
        assert_eq!(room.players().len(), 1);
    }

    #[test]
    fn test_join_during_round_is_rejected_without_changes() {
        // テスト項目: ラウンド進行中の参加は拒否され、players と scores は変化しない
        // given (前提条件):
        let (mut room, _) = create_room_with_players(&["Ali", "Sara"]);
        start(&mut room);
        let players_before = room.players().to_vec();
        let scores_before = room.scores().clone();

        // when (操作):
        let result = room.join(ConnectionId::generate(), name("Omar"), &GameRules::default());

        // then (期待する結果):
        assert_eq!(result, Err(JoinRejection::RoundInProgress));
        assert_eq!(room.players(), players_before.as_slice());
        assert_eq!(room.scores(), &scores_before);
    }

    #[test]
    fn test_start_round_with_one_player_is_rejected() {
        // テスト項目: 2 人未満ではラウンドを開始できず、状態も変化しない
        // given (前提条件):
        let (mut room, _) = create_room_with_players(&["Ali"]);

        // when (操作):
        let result = room.start_round(
            &CategoryCatalog::builtin(),
            &Shuffler::new(Some(1)),
            &GameRules::default(),
        );

        // then (期待する結果):
        assert_eq!(
            result,
            Err(StartRoundRejection::NotEnoughPlayers { required: 2 })
        );
        assert_eq!(room.round_index(), 0);
        assert!(room.items().is_empty());
        assert!(room.answer().is_empty());
        assert!(!room.is_game_started());
    }

    #[test]
    fn test_start_round_draws_first_category_and_hides_answer() {
        // テスト項目: ラウンド開始時に最初のカテゴリが選ばれ、answer はイベントに含まれない
        // given (前提条件):
        let (mut room, _) = create_room_with_players(&["Ali", "Sara"]);
        let first_category = room.category_order()[0].clone();

        // when (操作):
        let events = start(&mut room);

        // then (期待する結果):
        assert!(room.is_game_started());
        assert_eq!(room.current_category(), Some(first_category.as_str()));
        assert_eq!(events.len(), 1);
        match &events[0] {
            GameEvent::RoundStarted {
                items,
                category,
                current_round,
                players,
                ..
            } => {
                assert_eq!(items.as_slice(), room.items());
                assert_eq!(category, &first_category);
                assert_eq!(*current_round, 1);
                assert_eq!(players, &vec![name("Ali"), name("Sara")]);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_items_and_answer_are_permutations_of_category() {
        // テスト項目: items と answer は同じカテゴリのアイテムの並べ替えである
        // given (前提条件):
        let catalog = CategoryCatalog::builtin();
        let (mut room, _) = create_room_with_players(&["Ali", "Sara"]);

        // when (操作):
        start(&mut room);

        // then (期待する結果):
        let mut expected = catalog
            .items(room.current_category().unwrap())
            .unwrap()
            .to_vec();
        let mut items = room.items().to_vec();
        let mut answer = room.answer().to_vec();
        expected.sort();
        items.sort();
        answer.sort();
        assert_eq!(items, expected);
        assert_eq!(answer, expected);
        assert_eq!(room.items().len(), 6);
    }

    #[test]
    fn test_answer_is_shuffled_independently_of_items() {
        // テスト項目: answer は items とは独立にシャッフルされる（ほぼ常に異なる並び）
        // given (前提条件):
        let catalog = CategoryCatalog::builtin();
        let rules = GameRules::default();

        // when (操作):
        let identical = (0..20u64)
            .filter(|seed| {
                let (mut room, _) = create_room_with_players(&["Ali", "Sara"]);
                room.start_round(&catalog, &Shuffler::new(Some(*seed)), &rules)
                    .unwrap();
                room.items() == room.answer()
            })
            .count();

        // then (期待する結果):
        assert!(identical < 20);
    }

    #[test]
    fn test_start_round_while_running_is_noop() {
        // テスト項目: 進行中のラウンドを再度開始しても何も起こらない
        // given (前提条件):
        let (mut room, _) = create_room_with_players(&["Ali", "Sara"]);
        start(&mut room);
        let answer_before = room.answer().to_vec();

        // when (操作):
        let events = start(&mut room);

        // then (期待する結果):
        assert!(events.is_empty());
        assert_eq!(room.answer(), answer_before.as_slice());
    }

    #[test]
    fn test_count_correct_is_positional() {
        // テスト項目: 正解数は位置が一致した要素のみを数える
        // given (前提条件):
        let answer: Vec<String> = ["a", "b", "c", "d"].map(String::from).to_vec();
        let order: Vec<String> = ["a", "c", "b", "d"].map(String::from).to_vec();

        // when (操作):
        let correct = count_correct(&answer, &order);

        // then (期待する結果):
        assert_eq!(correct, 2);
    }

    #[test]
    fn test_count_correct_tolerates_short_and_long_orders() {
        // テスト項目: 長さが異なる並びでもエラーにならず、不足分は不一致として扱う
        // given (前提条件):
        let answer: Vec<String> = ["a", "b", "c"].map(String::from).to_vec();
        let short: Vec<String> = ["a"].map(String::from).to_vec();
        let long: Vec<String> = ["a", "b", "c", "z", "y"].map(String::from).to_vec();

        // when (操作):
        let short_correct = count_correct(&answer, &short);
        let long_correct = count_correct(&answer, &long);

        // then (期待する結果):
        assert_eq!(short_correct, 1);
        assert_eq!(long_correct, 3);
    }

    #[test]
    fn test_partial_submission_records_latest_result() {
        // テスト項目: 不完全な提出は結果が記録され、再提出で上書きされる
        // given (前提条件):
        let (mut room, _) = create_room_with_players(&["Ali", "Sara"]);
        start(&mut room);
        let rules = GameRules::default();
        let mut wrong = room.answer().to_vec();
        wrong.swap(0, 1);

        // when (操作):
        let first = room.submit(&name("Ali"), &wrong, &rules);
        let second = room.submit(&name("Ali"), &[], &rules);

        // then (期待する結果):
        assert_eq!(
            first.events(),
            &[GameEvent::Feedback {
                player: name("Ali"),
                correct_count: 4,
                total: 6,
            }]
        );
        assert!(matches!(second, SubmissionOutcome::Scored(_)));
        assert_eq!(room.submission_of(&name("Ali")), Some(Submission { correct: 0 }));
        assert_eq!(room.round_index(), 0);
        assert_eq!(room.score_of(&name("Ali")), 0);
    }

    #[test]
    fn test_perfect_submission_wins_round() {
        // テスト項目: 完全一致でスコアが 1 増え、ラウンドが進み、次ラウンドが許可される
        // given (前提条件):
        let (mut room, _) = create_room_with_players(&["Ali", "Sara"]);

        // when (操作):
        let outcome = win_round(&mut room, "Sara");

        // then (期待する結果):
        let answer = room.answer().to_vec();
        assert_eq!(
            outcome,
            SubmissionOutcome::RoundWon(vec![
                GameEvent::Feedback {
                    player: name("Sara"),
                    correct_count: 6,
                    total: 6,
                },
                GameEvent::RoundWon {
                    scores: Scores::from([(name("Ali"), 0), (name("Sara"), 1)]),
                    winners: vec![name("Sara")],
                    round_number: 1,
                    answer,
                },
                GameEvent::EnableStartNext,
            ])
        );
        assert_eq!(room.round_index(), 1);
        assert_eq!(room.phase(), RoomPhase::Lobby);
    }

    #[test]
    fn test_second_perfect_submission_after_win_is_ignored() {
        // テスト項目: 勝者決定後の同一ラウンドへの完全一致は加点されない
        // given (前提条件):
        let (mut room, _) = create_room_with_players(&["Ali", "Sara"]);
        win_round(&mut room, "Sara");
        let stale_answer = room.answer().to_vec();

        // when (操作):
        let outcome = room.submit(&name("Ali"), &stale_answer, &GameRules::default());

        // then (期待する結果):
        assert_eq!(outcome, SubmissionOutcome::Ignored);
        assert_eq!(room.score_of(&name("Ali")), 0);
        assert_eq!(room.round_index(), 1);
    }

    #[test]
    fn test_submission_from_unknown_player_is_ignored() {
        // テスト項目: ルームにいない名前での提出は無視される
        // given (前提条件):
        let (mut room, _) = create_room_with_players(&["Ali", "Sara"]);
        start(&mut room);
        let answer = room.answer().to_vec();

        // when (操作):
        let outcome = room.submit(&name("Mallory"), &answer, &GameRules::default());

        // then (期待する結果):
        assert_eq!(outcome, SubmissionOutcome::Ignored);
        assert!(!room.scores().contains_key(&name("Mallory")));
    }

    #[test]
    fn test_reaching_winning_score_ends_game_early() {
        // テスト項目: 誰かが 3 点に達すると 5 ラウンド前でもゲームが終了する
        // given (前提条件):
        let (mut room, _) = create_room_with_players(&["Ali", "Sara"]);
        win_round(&mut room, "Sara");
        win_round(&mut room, "Sara");

        // when (操作):
        let outcome = win_round(&mut room, "Sara");

        // then (期待する結果):
        assert!(matches!(outcome, SubmissionOutcome::GameOver(_)));
        assert_eq!(
            outcome.events().last(),
            Some(&GameEvent::GameEnded {
                scores: Scores::from([(name("Ali"), 0), (name("Sara"), 3)]),
                final_winners: vec![name("Sara")],
            })
        );
        assert_eq!(room.round_index(), 3);
        assert_eq!(room.phase(), RoomPhase::Finished);
        assert!(room.is_terminal(&GameRules::default()));
    }

    #[test]
    fn test_round_limit_ends_game_with_tied_winners() {
        // テスト項目: 5 ラウンド終了でゲームが終わり、同点の最高得点者が全員勝者になる
        // given (前提条件):
        let (mut room, _) = create_room_with_players(&["Ali", "Sara", "Omar"]);
        for winner in ["Ali", "Sara", "Ali", "Sara"] {
            win_round(&mut room, winner);
        }

        // when (操作):
        let outcome = win_round(&mut room, "Omar");

        // then (期待する結果):
        assert_eq!(
            outcome.events().last(),
            Some(&GameEvent::GameEnded {
                scores: Scores::from([(name("Ali"), 2), (name("Omar"), 1), (name("Sara"), 2)]),
                final_winners: vec![name("Ali"), name("Sara")],
            })
        );
        assert_eq!(room.round_index(), 5);
    }

    #[test]
    fn test_start_round_after_game_over_is_silent_noop() {
        // テスト項目: ゲーム終了後のラウンド開始は何も起こさない
        // given (前提条件):
        let (mut room, _) = create_room_with_players(&["Ali", "Sara"]);
        for _ in 0..3 {
            win_round(&mut room, "Ali");
        }

        // when (操作):
        let events = start(&mut room);

        // then (期待する結果):
        assert!(events.is_empty());
        assert_eq!(room.round_index(), 3);
        assert!(!room.is_game_started());
    }

    #[test]
    fn test_join_after_game_over_is_rejected() {
        // テスト項目: ゲーム終了後の参加は拒否される
        // given (前提条件):
        let (mut room, _) = create_room_with_players(&["Ali", "Sara"]);
        for _ in 0..3 {
            win_round(&mut room, "Ali");
        }

        // when (操作):
        let result = room.join(ConnectionId::generate(), name("Omar"), &GameRules::default());

        // then (期待する結果):
        assert_eq!(result, Err(JoinRejection::GameOver));
    }

    #[test]
    fn test_remove_player_clears_scores_and_submissions() {
        // テスト項目: 退出したプレイヤーは players, scores, submissions から削除される
        // given (前提条件):
        let (mut room, connections) = create_room_with_players(&["Ali", "Sara"]);
        start(&mut room);
        room.submit(&name("Ali"), &[], &GameRules::default());

        // when (操作):
        let events = room.remove_player(&connections[0]);

        // then (期待する結果):
        assert_eq!(
            events,
            Some(vec![GameEvent::StateSync {
                players: vec![name("Sara")],
                scores: Scores::from([(name("Sara"), 0)]),
            }])
        );
        assert!(!room.scores().contains_key(&name("Ali")));
        assert_eq!(room.submission_of(&name("Ali")), None);
    }

    #[test]
    fn test_remove_unknown_connection_returns_none() {
        // テスト項目: ルームにいない接続の削除は None を返し、状態を変えない
        // given (前提条件):
        let (mut room, _) = create_room_with_players(&["Ali"]);

        // when (操作):
        let events = room.remove_player(&ConnectionId::generate());

        // then (期待する結果):
        assert_eq!(events, None);
        assert_eq!(room.players().len(), 1);
    }

    #[test]
    fn test_room_emptied_mid_round_reopens_for_joins() {
        // テスト項目: ラウンド中に全員が切断したルームはロビーに戻り、再び参加できる
        // given (前提条件):
        let (mut room, connections) = create_room_with_players(&["Ali", "Sara"]);
        start(&mut room);

        // when (操作):
        for connection_id in &connections {
            room.remove_player(connection_id);
        }

        // then (期待する結果):
        assert_eq!(room.phase(), RoomPhase::Lobby);
        assert!(!room.is_game_started());
        assert!(!room.is_terminal(&GameRules::default()));
        assert!(room.items().is_empty());
        assert!(room.answer().is_empty());
        assert_eq!(room.current_category(), None);
        assert_eq!(room.round_index(), 0);

        let rules = GameRules::default();
        assert!(room.join(ConnectionId::generate(), name("Omar"), &rules).is_ok());
        assert_eq!(room.player_names(), vec![name("Omar")]);
    }

    #[test]
    fn test_round_keeps_running_while_a_player_remains() {
        // テスト項目: 1 人でも残っていればラウンドは継続する
        // given (前提条件):
        let (mut room, connections) = create_room_with_players(&["Ali", "Sara"]);
        start(&mut room);

        // when (操作):
        room.remove_player(&connections[0]);

        // then (期待する結果):
        assert!(room.is_game_started());
        assert_eq!(room.items().len(), 6);
    }
}
