use crate::engine_client::{EngineClient, ProtocolError, Tokens};
use hb_core::TurnSnapshot;
use hb_domain::{Dropoff, DropoffId, GameConstants, GameMap, MapError, Player, PlayerId, Position, Ship, ShipId};
use std::io::{BufRead, Write};
use tracing::{event, Level};

/// Our view of the game, refreshed from the engine once per turn.
#[derive(Debug, Clone)]
pub struct Game {
    pub constants: GameConstants,
    pub my_id: PlayerId,
    pub players: Vec<Player>,
    pub map: GameMap,
    pub turn_number: usize,
}

impl Game {
    /// Reads the init handshake: constants, players with their shipyards and the full map.
    pub fn initialize<R: BufRead, W: Write>(client: &mut EngineClient<R, W>) -> Result<Game, ProtocolError> {
        let constants = GameConstants::from_json(&client.expect_line("game constants")?)?;

        let line = client.expect_line("player count and id")?;
        let mut tokens = Tokens::new(&line);
        let num_players: usize = tokens.next("number of players")?;
        let my_id = PlayerId(tokens.next("my player id")?);

        let mut players = Vec::new();
        for _ in 0..num_players {
            let line = client.expect_line("player shipyard")?;
            let mut tokens = Tokens::new(&line);
            let player_id = PlayerId(tokens.next("player id")?);
            let shipyard = Position::new(tokens.next("shipyard x")?, tokens.next("shipyard y")?);
            players.push(Player::new(player_id, shipyard));
        }

        let line = client.expect_line("map dimensions")?;
        let mut tokens = Tokens::new(&line);
        let width: usize = tokens.next("map width")?;
        let height: usize = tokens.next("map height")?;
        GameMap::cell_count(width, height)?;

        let mut halite = Vec::new();
        for _ in 0..height {
            let line = client.expect_line("map row")?;
            let row: Vec<usize> = line
                .split_whitespace()
                .map(|token| {
                    token.parse().map_err(|_| ProtocolError::InvalidToken {
                        expected: "cell halite",
                        token: token.to_string(),
                        line: line.clone(),
                    })
                })
                .collect::<Result<_, _>>()?;
            if row.len() != width {
                return Err(ProtocolError::InvalidMap(MapError::CellCountMismatch {
                    expected: width,
                    actual: row.len(),
                }));
            }
            halite.extend(row);
        }

        let map = GameMap::new(width, height, halite)?;

        if !players.iter().any(|p| p.id == my_id) {
            return Err(ProtocolError::UnknownPlayer(my_id));
        }

        Ok(Game {
            constants,
            my_id,
            players,
            map,
            turn_number: 0,
        })
    }

    /// Applies the next turn's update. Returns `false` once the engine has ended the game.
    pub fn update_frame<R: BufRead, W: Write>(&mut self, client: &mut EngineClient<R, W>) -> Result<bool, ProtocolError> {
        let Some(line) = client.read_line()? else {
            return Ok(false);
        };
        self.turn_number = Tokens::new(&line).next("turn number")?;

        for _ in 0..self.players.len() {
            let line = client.expect_line("player update")?;
            let mut tokens = Tokens::new(&line);
            let player_id = PlayerId(tokens.next("player id")?);
            let num_ships: usize = tokens.next("number of ships")?;
            let num_dropoffs: usize = tokens.next("number of dropoffs")?;
            let halite: usize = tokens.next("player halite")?;

            let ships = (0..num_ships)
                .map(|_| Self::read_ship(client, player_id))
                .collect::<Result<Vec<_>, _>>()?;
            let dropoffs = (0..num_dropoffs)
                .map(|_| Self::read_dropoff(client, player_id))
                .collect::<Result<Vec<_>, _>>()?;

            let player = self
                .players
                .iter_mut()
                .find(|p| p.id == player_id)
                .ok_or(ProtocolError::UnknownPlayer(player_id))?;
            player.halite = halite;
            player.ships = ships;
            player.dropoffs = dropoffs;
        }

        let line = client.expect_line("map update count")?;
        let update_count: usize = Tokens::new(&line).next("map update count")?;
        for _ in 0..update_count {
            let line = client.expect_line("map update")?;
            let mut tokens = Tokens::new(&line);
            let position = Position::new(tokens.next("cell x")?, tokens.next("cell y")?);
            let halite: usize = tokens.next("cell halite")?;
            self.map.set_halite(&position, halite);
        }

        self.map.clear_occupancy();
        for ship in self.players.iter().flat_map(|p| p.ships.iter()) {
            self.map.mark_occupied(&ship.position, ship.id);
        }

        event!(Level::DEBUG, "Turn {} applied, {} map updates", self.turn_number, update_count);
        Ok(true)
    }

    fn read_ship<R: BufRead, W: Write>(client: &mut EngineClient<R, W>, owner: PlayerId) -> Result<Ship, ProtocolError> {
        let line = client.expect_line("ship")?;
        let mut tokens = Tokens::new(&line);
        Ok(Ship {
            id: ShipId(tokens.next("ship id")?),
            owner,
            position: Position::new(tokens.next("ship x")?, tokens.next("ship y")?),
            halite: tokens.next("ship halite")?,
        })
    }

    fn read_dropoff<R: BufRead, W: Write>(client: &mut EngineClient<R, W>, owner: PlayerId) -> Result<Dropoff, ProtocolError> {
        let line = client.expect_line("dropoff")?;
        let mut tokens = Tokens::new(&line);
        Ok(Dropoff {
            id: DropoffId(tokens.next("dropoff id")?),
            owner,
            position: Position::new(tokens.next("dropoff x")?, tokens.next("dropoff y")?),
        })
    }

    pub fn me(&self) -> Result<&Player, ProtocolError> {
        self.players
            .iter()
            .find(|p| p.id == self.my_id)
            .ok_or(ProtocolError::UnknownPlayer(self.my_id))
    }

    pub fn snapshot(&self) -> Result<TurnSnapshot<'_>, ProtocolError> {
        let me = self.me()?;
        Ok(TurnSnapshot {
            turn_number: self.turn_number,
            treasury: me.halite,
            shipyard: me.shipyard,
            ships: &me.ships,
            map: &self.map,
            constants: &self.constants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hb_core::{FleetAdmiral, HaliteAwarePathOracle, StrategyConfig};
    use hb_domain::{Command, Direction};
    use std::io::Cursor;
    use test_log::test;

    const INIT: &str = r#"{"MAX_ENERGY":1000,"NEW_ENTITY_ENERGY_COST":1000,"MAX_TURNS":400,"MOVE_COST_RATIO":10}
2 1
0 1 1
1 3 3
4 4
10 20 30 40
50 60 70 80
90 100 110 120
130 140 150 160
"#;

    fn client_with(input: &str) -> EngineClient<Cursor<String>, Vec<u8>> {
        EngineClient::new(Cursor::new(input.to_string()), Vec::new())
    }

    #[test]
    fn reads_the_init_handshake() {
        let mut client = client_with(INIT);

        let game = Game::initialize(&mut client).unwrap();

        assert_eq!(game.my_id, PlayerId(1));
        assert_eq!(game.players.len(), 2);
        assert_eq!(game.me().unwrap().shipyard, Position::new(3, 3));
        assert_eq!(game.map.width, 4);
        assert_eq!(game.map.halite_at(&Position::new(2, 1)), 70);
        assert_eq!(game.constants.max_turns, 400);
    }

    #[test]
    fn rejects_a_short_map_row() {
        let input = INIT.replace("50 60 70 80", "50 60 70");
        let mut client = client_with(&input);

        assert!(matches!(Game::initialize(&mut client), Err(ProtocolError::InvalidMap(_))));
    }

    #[test]
    fn rejects_garbage_in_the_map() {
        let input = INIT.replace("90 100", "90 lots");
        let mut client = client_with(&input);

        assert!(matches!(Game::initialize(&mut client), Err(ProtocolError::InvalidToken { expected: "cell halite", .. })));
    }

    #[test]
    fn absurd_player_count_runs_out_of_input_instead_of_allocating() {
        let mut client = client_with("{}\n18446744073709551615 0\n");

        assert!(matches!(
            Game::initialize(&mut client),
            Err(ProtocolError::UnexpectedEof { expected: "player shipyard" })
        ));
    }

    #[test]
    fn rejects_map_dimensions_that_cannot_be_addressed() {
        let mut client = client_with("{}\n1 0\n0 0 0\n4000000000 4000000000\n");

        assert!(matches!(
            Game::initialize(&mut client),
            Err(ProtocolError::InvalidMap(MapError::InvalidDimensions {
                width: 4_000_000_000,
                height: 4_000_000_000
            }))
        ));
    }

    #[test]
    fn applies_a_frame_update() {
        let frame = "\
5
0 1 0 1200
7 1 2 0
1 2 0 3400
3 2 1 120
4 3 3 800
2
2 0 5
0 3 0
";
        let input = format!("{INIT}{frame}");
        let mut client = client_with(&input);
        let mut game = Game::initialize(&mut client).unwrap();

        assert!(game.update_frame(&mut client).unwrap());
        assert!(!game.update_frame(&mut client).unwrap());

        assert_eq!(game.turn_number, 5);
        let me = game.me().unwrap();
        assert_eq!(me.halite, 3_400);
        assert_eq!(
            me.ships,
            vec![
                Ship {
                    id: ShipId(3),
                    owner: PlayerId(1),
                    position: Position::new(2, 1),
                    halite: 120
                },
                Ship {
                    id: ShipId(4),
                    owner: PlayerId(1),
                    position: Position::new(3, 3),
                    halite: 800
                },
            ]
        );
        assert_eq!(me.dropoffs.len(), 0);
        assert_eq!(game.players[0].ships[0].id, ShipId(7));
        assert_eq!(game.map.halite_at(&Position::new(2, 0)), 5);
        assert_eq!(game.map.halite_at(&Position::new(0, 3)), 0);
        assert!(game.map.is_occupied(&Position::new(1, 2)));
        assert!(game.map.is_occupied(&Position::new(3, 3)));
    }

    #[test]
    fn frame_for_an_unknown_player_is_an_error() {
        let input = format!("{INIT}1\n9 0 0 0\n");
        let mut client = client_with(&input);
        let mut game = Game::initialize(&mut client).unwrap();

        assert!(matches!(game.update_frame(&mut client), Err(ProtocolError::UnknownPlayer(PlayerId(9)))));
    }

    #[test]
    fn snapshot_feeds_the_fleet_admiral() {
        let frame = "1\n0 0 0 0\n1 1 0 5000\n0 1 0 0\n0\n";
        let input = format!("{INIT}{frame}");
        let mut client = client_with(&input);
        let mut game = Game::initialize(&mut client).unwrap();
        game.update_frame(&mut client).unwrap();

        let mut admiral = FleetAdmiral::new(StrategyConfig::default(), Box::new(HaliteAwarePathOracle::new(10)));
        let report = admiral.dispatch_turn(&game.snapshot().unwrap());

        // (1, 0) holds 20, its richest neighbour wraps around to (1, 3) with 140
        assert_eq!(report.commands, vec![Command::Move(ShipId(0), Direction::North), Command::Spawn]);
    }
}
