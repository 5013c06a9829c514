//! Line-oriented command session
//!
//! Reads one `Command` per line, applies it, and writes one `Response` per
//! line. Malformed input gets an error response and the session carries on;
//! end of input ends the session.

use std::io::{self, BufRead, Write};

use seatplan_core::{LayoutStore, Point};

use crate::protocol::{Command, Response};
use crate::state::{lock, AppState};

/// Run a session until `input` is exhausted
pub fn run<R: BufRead, W: Write>(state: &AppState, input: R, mut output: W) -> io::Result<()> {
    let mut handled = 0u64;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Command>(line) {
            Ok(command) => dispatch(state, command),
            Err(e) => {
                tracing::warn!(error = %e, "Rejected malformed command");
                Response::error(format!("Malformed command: {}", e))
            }
        };

        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
        handled += 1;
    }

    tracing::info!(commands = handled, "Session ended");
    Ok(())
}

/// Apply a single command
pub fn dispatch(state: &AppState, command: Command) -> Response {
    match command {
        Command::AddTable { shape, seats } => match state.add_table(shape, seats) {
            Ok(table_id) => {
                let number = lock(&state.store)
                    .table(table_id)
                    .map(|t| t.number)
                    .unwrap_or_default();
                Response::TableAdded { table_id, number }
            }
            Err(e) => Response::error(e),
        },

        Command::Reposition { table_id, x, y } => Response::Applied {
            applied: lock(&state.store).reposition(table_id, x, y),
        },

        Command::AssignGuest {
            table_id,
            seat,
            guest,
        } => match lock(&state.store).assign_guest(table_id, seat, guest) {
            Ok(applied) => Response::Applied { applied },
            Err(e) => Response::error(e),
        },

        Command::RemoveGuest { table_id, seat } => Response::GuestRemoved {
            guest: lock(&state.store).remove_guest(table_id, seat),
        },

        Command::RenumberTable { table_id, number } => Response::Applied {
            applied: state.finish_renumber(table_id, number),
        },

        Command::SetDescription { table_id, text } => Response::Applied {
            applied: lock(&state.store).set_description(table_id, text),
        },

        Command::RemoveTable { table_id } => Response::Applied {
            applied: state.remove_table(table_id).is_some(),
        },

        Command::AddEntree { name } => match lock(&state.store).add_entree_option(&name) {
            Ok(()) => Response::Applied { applied: true },
            Err(e) => Response::error(e),
        },

        Command::RemoveEntree { name } => Response::Applied {
            applied: lock(&state.store).remove_entree_option(&name),
        },

        Command::SetExpectedGuests { count } => {
            lock(&state.store).set_expected_guests(count);
            Response::Applied { applied: true }
        }

        Command::Statistics => {
            let store = lock(&state.store);
            let statistics = store.compute_statistics();
            Response::Statistics {
                statistics,
                guests_unplaced: statistics.guests_unplaced(),
                duplicate_numbers: store.duplicate_table_numbers(),
            }
        }

        Command::Roster => Response::Roster {
            rows: lock(&state.store).roster(),
        },

        Command::EntreeChoices => Response::Entrees {
            choices: lock(&state.store)
                .entree_choices()
                .into_iter()
                .map(String::from)
                .collect(),
        },

        Command::SeatAnchors { table_id } => Response::SeatAnchors {
            anchors: lock(&state.store)
                .seat_anchors(table_id)
                .unwrap_or_default(),
        },

        Command::SeatAt { table_id, x, y } => {
            let store = lock(&state.store);
            let seat = store
                .table(table_id)
                .and_then(|t| store.config().geometry.seat_at(t, Point::new(x, y)));
            Response::Seat { seat }
        }

        Command::Snapshot => Response::Snapshot {
            state: lock(&state.store).snapshot(),
        },

        Command::Restore { state: snapshot } => {
            let mut store = lock(&state.store);
            let config = store.config().clone();
            match LayoutStore::restore(snapshot, config) {
                Ok(restored) => {
                    *store = restored;
                    drop(store);

                    let mut view = lock(&state.view);
                    view.clear_selection();
                    view.finish_number_edit();
                    lock(&state.drag).end();
                    Response::Applied { applied: true }
                }
                Err(e) => Response::error(e),
            }
        }

        Command::SetEditMode { enabled } => {
            lock(&state.view).set_edit_mode(enabled);
            if !enabled {
                lock(&state.drag).end();
            }
            view_response(state)
        }

        Command::ToggleEditMode => {
            let mut view = lock(&state.view);
            view.toggle_edit_mode();
            if !view.edit_mode {
                lock(&state.drag).end();
            }
            drop(view);
            view_response(state)
        }

        Command::SetZoom { zoom } => {
            lock(&state.view).set_zoom(zoom);
            view_response(state)
        }

        Command::SelectSeat { table_id, seat } => {
            let exists = lock(&state.store)
                .table(table_id)
                .is_some_and(|t| t.has_seat(seat));
            let applied = exists && lock(&state.view).select_seat(table_id, seat);
            Response::Applied { applied }
        }

        Command::ClearSelection => {
            lock(&state.view).clear_selection();
            view_response(state)
        }

        Command::SaveSelectedGuest { guest } => match state.assign_selected_seat(guest) {
            Ok(applied) => Response::Applied { applied },
            Err(e) => Response::error(e),
        },

        Command::RemoveSelectedGuest => Response::GuestRemoved {
            guest: state.remove_selected_guest(),
        },

        Command::EditTableNumber { table_id } => {
            let exists = lock(&state.store).table(table_id).is_some();
            Response::Applied {
                applied: exists && lock(&state.view).begin_number_edit(table_id),
            }
        }

        Command::OpenTableCreator => Response::Applied {
            applied: lock(&state.view).open_table_creator(),
        },

        Command::CloseTableCreator => {
            lock(&state.view).close_table_creator();
            view_response(state)
        }

        Command::View => view_response(state),

        Command::DragBegin { table_id, x, y } => Response::Applied {
            applied: state.drag_begin(table_id, Point::new(x, y)),
        },

        Command::DragMove { x, y } => Response::Dragged {
            position: state.drag_move(Point::new(x, y)),
        },

        Command::DragEnd => Response::DragEnded {
            table_id: state.drag_end(),
        },
    }
}

fn view_response(state: &AppState) -> Response {
    Response::View {
        view: lock(&state.view).clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatplan_core::{LayoutConfig, TableShape};
    use serde_json::Value;

    fn run_lines(state: &AppState, lines: &[String]) -> Vec<Value> {
        let input = lines.join("\n");
        let mut output = Vec::new();
        run(state, input.as_bytes(), &mut output).unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_session_round_trip() {
        let state = AppState::new(LayoutConfig::default());
        let first = run_lines(
            &state,
            &[
                r#"{"type":"AddTable","shape":"round","seats":8}"#.to_string(),
                r#"{"type":"AddTable","shape":"rectangle","seats":6}"#.to_string(),
            ],
        );
        assert_eq!(first[0]["type"], "TableAdded");
        assert_eq!(first[0]["number"], 1);
        assert_eq!(first[1]["number"], 2);

        let table_id = first[0]["table_id"].as_str().unwrap().to_string();
        let responses = run_lines(
            &state,
            &[
                format!(
                    r#"{{"type":"AssignGuest","table_id":"{table_id}","seat":1,"guest":{{"first_name":"Jane","last_name":"Doe","entree":"Beef Tenderloin"}}}}"#
                ),
                r#"{"type":"Statistics"}"#.to_string(),
                r#"{"type":"Roster"}"#.to_string(),
            ],
        );

        assert_eq!(responses[0]["applied"], true);
        assert_eq!(responses[1]["total_seats"], 14);
        assert_eq!(responses[1]["guests_placed"], 1);
        assert_eq!(responses[1]["seats_remaining"], 13);
        assert_eq!(responses[2]["rows"][0]["first_name"], "Jane");
    }

    #[test]
    fn test_malformed_line_does_not_end_session() {
        let state = AppState::new(LayoutConfig::default());
        let responses = run_lines(
            &state,
            &[
                "not json".to_string(),
                String::new(),
                r#"{"type":"Statistics"}"#.to_string(),
            ],
        );

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["type"], "Error");
        assert_eq!(responses[1]["type"], "Statistics");
    }

    #[test]
    fn test_validation_error_reported() {
        let state = AppState::new(LayoutConfig::default());
        let response = dispatch(
            &state,
            Command::AddTable {
                shape: TableShape::Round,
                seats: 1,
            },
        );
        assert!(matches!(response, Response::Error { .. }));
        assert!(lock(&state.store).tables().is_empty());
    }

    #[test]
    fn test_select_seat_requires_real_seat() {
        let state = AppState::new(LayoutConfig::default());
        let table_id = state.add_table(TableShape::Round, 4).unwrap();

        let response = dispatch(&state, Command::SelectSeat { table_id, seat: 9 });
        assert!(matches!(response, Response::Applied { applied: false }));

        let response = dispatch(&state, Command::SelectSeat { table_id, seat: 4 });
        assert!(matches!(response, Response::Applied { applied: true }));
    }

    #[test]
    fn test_guest_form_flow() {
        let state = AppState::new(LayoutConfig::default());
        let table_id = state.add_table(TableShape::Rectangle, 6).unwrap();

        dispatch(&state, Command::SelectSeat { table_id, seat: 3 });
        let response = dispatch(
            &state,
            Command::SaveSelectedGuest {
                guest: seatplan_core::Guest::new("Jane", "Doe"),
            },
        );
        assert!(matches!(response, Response::Applied { applied: true }));

        dispatch(&state, Command::SelectSeat { table_id, seat: 3 });
        let response = dispatch(&state, Command::RemoveSelectedGuest);
        assert!(matches!(response, Response::GuestRemoved { guest: Some(_) }));

        // view mode locks the chart
        dispatch(&state, Command::ToggleEditMode);
        let response = dispatch(&state, Command::OpenTableCreator);
        assert!(matches!(response, Response::Applied { applied: false }));
        let response = dispatch(&state, Command::EditTableNumber { table_id });
        assert!(matches!(response, Response::Applied { applied: false }));
    }

    #[test]
    fn test_snapshot_and_restore() {
        let state = AppState::new(LayoutConfig::default());
        state.add_table(TableShape::Round, 8).unwrap();

        let Response::Snapshot { state: snapshot } = dispatch(&state, Command::Snapshot) else {
            panic!("expected snapshot");
        };

        let other = AppState::new(LayoutConfig::default());
        let response = dispatch(&other, Command::Restore { state: snapshot });
        assert!(matches!(response, Response::Applied { applied: true }));
        assert_eq!(lock(&other.store).tables().len(), 1);
    }

    #[test]
    fn test_restore_with_repeated_table_keeps_layout() {
        let state = AppState::new(LayoutConfig::default());
        state.add_table(TableShape::Round, 8).unwrap();

        let Response::Snapshot { state: mut snapshot } = dispatch(&state, Command::Snapshot) else {
            panic!("expected snapshot");
        };
        let twin = snapshot.tables[0].clone();
        snapshot.tables.push(twin);

        let response = dispatch(&state, Command::Restore { state: snapshot });
        assert!(matches!(response, Response::Error { .. }));
        assert_eq!(lock(&state.store).tables().len(), 1);
    }

    #[test]
    fn test_drag_over_protocol() {
        let state = AppState::new(LayoutConfig::default());
        let table_id = state.add_table(TableShape::Round, 8).unwrap();

        dispatch(
            &state,
            Command::DragBegin {
                table_id,
                x: 200.0,
                y: 200.0,
            },
        );
        let response = dispatch(&state, Command::DragMove { x: 260.0, y: 240.0 });
        assert!(matches!(
            response,
            Response::Dragged {
                position: Some(Point { x, y })
            } if x == 260.0 && y == 240.0
        ));

        let response = dispatch(&state, Command::DragEnd);
        assert!(matches!(response, Response::DragEnded { table_id: Some(id) } if id == table_id));
    }
}
