//! Player roster: create, list, look up, edit and delete players.

use crate::models::{NewPlayer, Player, PlayerId, PlayerPatch, RankingError, DEFAULT_POINTS};
use crate::store::PlayerStore;

fn validate_name(name: &str) -> Result<&str, RankingError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RankingError::Validation("Player name must not be empty".to_string()));
    }
    Ok(name)
}

fn validate_points(total_points: i64) -> Result<i64, RankingError> {
    if total_points < 0 {
        return Err(RankingError::Validation(
            "total_points must be a non-negative number".to_string(),
        ));
    }
    Ok(total_points)
}

fn parse_id(raw: &str) -> Result<PlayerId, RankingError> {
    PlayerId::parse_str(raw.trim()).map_err(|_| RankingError::InvalidId(raw.to_string()))
}

/// Create a player. Rank is computed from the starting total before the first save.
pub fn create_player<S: PlayerStore + ?Sized>(
    store: &mut S,
    new: NewPlayer,
) -> Result<Player, RankingError> {
    let name = validate_name(&new.name)?;
    let total_points = validate_points(new.total_points.unwrap_or(DEFAULT_POINTS))?;
    if store.find_by_name(name)?.is_some() {
        return Err(RankingError::NameTaken(name.to_string()));
    }
    let player = Player::new(name, total_points, new.phone_number.unwrap_or_default());
    store.insert(player.clone())?;
    log::info!("Created player {} ({} pts, rank {})", player.name, player.total_points, player.rank);
    Ok(player)
}

/// All players, highest total first. Ties keep the store's order.
pub fn list_rankings<S: PlayerStore + ?Sized>(store: &S) -> Result<Vec<Player>, RankingError> {
    let mut players = store.all()?;
    players.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    Ok(players)
}

/// Permanently remove a player by exact (trimmed) name.
pub fn delete_player_by_name<S: PlayerStore + ?Sized>(
    store: &mut S,
    name: &str,
) -> Result<(), RankingError> {
    let name = validate_name(name)?;
    if !store.delete_by_name(name)? {
        return Err(RankingError::PlayerNotFound(name.to_string()));
    }
    log::info!("Deleted player {}", name);
    Ok(())
}

/// Look up a player by id string.
pub fn get_player_by_id<S: PlayerStore + ?Sized>(store: &S, id: &str) -> Result<Player, RankingError> {
    let id = parse_id(id)?;
    store.find_by_id(id)?.ok_or(RankingError::IdNotFound(id))
}

/// Edit name, total and phone number. A new total also recomputes the rank.
pub fn update_player_details<S: PlayerStore + ?Sized>(
    store: &mut S,
    id: &str,
    patch: PlayerPatch,
) -> Result<Player, RankingError> {
    let id = parse_id(id)?;
    if patch.is_empty() {
        return Err(RankingError::Validation(
            "No updatable field given (name, total_points, phone_number)".to_string(),
        ));
    }
    let name = patch.name.as_deref().map(validate_name).transpose()?;
    let total_points = patch.total_points.map(validate_points).transpose()?;

    let mut player = store.find_by_id(id)?.ok_or(RankingError::IdNotFound(id))?;
    if let Some(name) = name {
        if name != player.name && store.find_by_name(name)?.is_some() {
            return Err(RankingError::NameTaken(name.to_string()));
        }
        player.name = name.to_string();
    }
    if let Some(total_points) = total_points {
        player.set_points(total_points);
    }
    if let Some(phone_number) = patch.phone_number {
        player.phone_number = phone_number;
    }
    store.save(&player)?;
    log::info!("Updated player {} ({} pts, rank {})", player.name, player.total_points, player.rank);
    Ok(player)
}
