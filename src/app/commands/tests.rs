use glam::{IVec3, Vec2, Vec3};

use super::*;
use crate::app::state::EditorState;
use crate::core::{GridRange, OrthoAngle};

fn test_state() -> EditorState {
    EditorState::new(GridRange::new(0, 9), GridRange::new(0, 9))
}

fn two_by_three_block() -> crate::core::BlockData {
    crate::core::BlockData::new(IVec3::new(2, 1, 3), Vec3::ZERO).expect("gültige Maße")
}

#[test]
fn slot_rejects_double_execute() {
    let mut state = test_state();
    let mut slot = CommandSlot::new(StageCommand::initialize());

    slot.execute(&mut state).expect("erste Ausführung");
    assert_eq!(slot.execute(&mut state), Err(CommandError::AlreadyExecuted));
}

#[test]
fn slot_rejects_undo_before_execute() {
    let mut state = test_state();
    let mut slot = CommandSlot::new(StageCommand::initialize());

    assert_eq!(slot.undo(&mut state), Err(CommandError::NotExecuted));
}

#[test]
fn slot_allows_re_execute_after_undo() {
    let mut state = test_state();
    let mut slot = CommandSlot::new(StageCommand::initialize());

    slot.execute(&mut state).expect("Ausführung");
    slot.undo(&mut state).expect("Rücknahme");
    slot.execute(&mut state).expect("erneute Ausführung");
}

#[test]
fn place_block_fills_region_and_registers() {
    let mut state = test_state();
    let mut command = PlaceBlock::new(
        two_by_three_block(),
        Vec2::new(2.0, 2.0),
        OrthoAngle::Zero,
        &mut state,
    );
    let id = command.block_id();

    command.execute(&mut state).expect("Platzierung gültig");

    assert_eq!(state.block_count(), 1);
    assert_eq!(state.stage.is_region_free(2, 2, 2, 3), Ok(false));
    let placed = state.block(id).expect("Block registriert");
    assert_eq!(placed.rect, command.rect());
}

#[test]
fn place_block_undo_restores_state() {
    let mut state = test_state();
    let mut command = PlaceBlock::new(
        two_by_three_block(),
        Vec2::new(2.0, 2.0),
        OrthoAngle::Zero,
        &mut state,
    );

    command.execute(&mut state).expect("Platzierung gültig");
    command.undo(&mut state).expect("Rücknahme gültig");

    assert_eq!(state.block_count(), 0);
    assert_eq!(state.stage.is_region_free(2, 2, 2, 3), Ok(true));
}

#[test]
fn place_block_swaps_extents_when_rotated() {
    let mut state = test_state();
    let command = PlaceBlock::new(
        two_by_three_block(),
        Vec2::new(2.0, 2.0),
        OrthoAngle::Ninety,
        &mut state,
    );

    let rect = command.rect();
    assert_eq!(rect.length_x, 3);
    assert_eq!(rect.length_z, 2);
}

#[test]
fn delete_block_round_trip() {
    let mut state = test_state();
    let mut place = PlaceBlock::new(
        two_by_three_block(),
        Vec2::new(2.0, 2.0),
        OrthoAngle::Zero,
        &mut state,
    );
    let id = place.block_id();
    place.execute(&mut state).expect("Platzierung gültig");

    let mut delete = DeleteBlock::new(id, &state).expect("Block vorhanden");
    delete.execute(&mut state).expect("Löschung gültig");
    assert_eq!(state.block_count(), 0);
    assert_eq!(state.stage.is_region_free(2, 2, 2, 3), Ok(true));

    delete.undo(&mut state).expect("Rücknahme gültig");
    assert_eq!(state.block_count(), 1);
    assert_eq!(state.stage.is_region_free(2, 2, 2, 3), Ok(false));
    assert!(state.block(id).is_some());
}

#[test]
fn delete_unknown_block_fails() {
    let mut state = test_state();
    let ghost = state.allocate_block_id();
    assert!(matches!(
        DeleteBlock::new(ghost, &state),
        Err(CommandError::UnknownBlock(id)) if id == ghost
    ));
}

#[test]
fn screen_names_describe_command_kinds() {
    let mut state = test_state();
    assert_eq!(StageCommand::initialize().screen_name(), "Neue Stage erstellt");

    let place = StageCommand::PlaceBlock(PlaceBlock::new(
        two_by_three_block(),
        Vec2::new(2.0, 2.0),
        OrthoAngle::Zero,
        &mut state,
    ));
    assert_eq!(place.screen_name(), "Block platziert");
}
