use crate::{
    error::ingest::IngestError,
    ingest::sheet::SheetGrid,
    model::{
        vocab::{Direction, Movement, VehicleClass},
        volume::{DirectionBlock, MovementColumn, VolumeBreakdown},
    },
};

static DIRECTION_ANCHOR: &str = "Direction";
static MOVEMENT_ANCHOR: &str = "Start Time";
static COUNT_ANCHOR: &str = "Grand Total";

/// Parse a volume breakdown grid into its direction/movement/count hierarchy.
///
/// The grid has no fixed coordinates across files, so structure is located
/// by three anchor labels in the first column: "Direction" (direction header
/// row), "Start Time" (the time-column header doubles as the movement label
/// row in the source format), and "Grand Total" (first row of the
/// vehicle-class block, which runs to the bottom of the sheet).
///
/// Direction header cells are sparse: a direction takes effect at the column
/// where it appears and carries forward until the next direction cell. The
/// current direction is threaded through the column scan as the trailing
/// block of the accumulated result, never as shared mutable state.
pub fn parse_volume_grid(grid: &SheetGrid) -> Result<VolumeBreakdown, IngestError> {
    let direction_row = anchor_row(grid, DIRECTION_ANCHOR)?;
    let movement_row = anchor_row(grid, MOVEMENT_ANCHOR)?;
    let count_row = anchor_row(grid, COUNT_ANCHOR)?;

    let mut breakdown = VolumeBreakdown::default();

    for col in 1..grid.width() {
        if let Some(direction) = grid
            .text(direction_row, col)
            .and_then(Direction::from_label)
        {
            breakdown.directions.push(DirectionBlock::new(direction));
        }

        let movement_label = grid.text(movement_row, col).unwrap_or("");
        let Some(movement) = Movement::classify(movement_label) else {
            // Subtotal/grand-total column: no movement-level facts.
            continue;
        };

        // A malformed file may put movement columns before any direction
        // column; those contribute no facts rather than failing the file.
        if let Some(block) = breakdown.directions.last_mut() {
            block.movements.push(MovementColumn {
                movement,
                counts: column_counts(grid, count_row, col),
            });
        }
    }

    Ok(breakdown)
}

fn anchor_row(grid: &SheetGrid, anchor: &'static str) -> Result<usize, IngestError> {
    grid.find_label_row(anchor)
        .ok_or(IngestError::AnchorNotFound(anchor))
}

/// Pair the vehicle-class label column against one data column.
///
/// Only labels naming a known vehicle class survive, which drops the
/// "Grand Total" row itself and any per-interval subtotal rows. A blank
/// count cell is omitted; an explicit zero is a valid observation.
fn column_counts(grid: &SheetGrid, count_row: usize, col: usize) -> Vec<(VehicleClass, i32)> {
    (count_row..grid.height())
        .filter_map(|row| {
            let vehicle = grid.text(row, 0).and_then(VehicleClass::from_label)?;
            let count = grid.number(row, col)?;
            Some((vehicle, count.round() as i32))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::ingest::sheet::CellValue;

    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn num(n: f64) -> CellValue {
        CellValue::Number(n)
    }

    fn blank() -> CellValue {
        CellValue::Empty
    }

    /// Two direction blocks with sparse direction cells, a subtotal column,
    /// and an unrecognized movement label.
    ///
    /// Columns: Northbound/Left, (carried)/Right, (carried)/App Total,
    /// Southbound/Through Traffic.
    fn volume_rows() -> Vec<Vec<CellValue>> {
        vec![
            vec![
                text("Direction"),
                text("Northbound"),
                blank(),
                blank(),
                text("Southbound"),
            ],
            vec![
                text("Start Time"),
                text("Left"),
                text("Right"),
                text("App Total"),
                text("Through Traffic"),
            ],
            vec![text("07:00"), num(1.0), num(2.0), num(3.0), num(4.0)],
            vec![text("Grand Total"), num(10.0), num(12.0), num(22.0), num(9.0)],
            vec![text("Cars"), num(8.0), num(12.0), num(20.0), num(0.0)],
            vec![text("Buses"), num(2.0), blank(), num(2.0), num(9.0)],
            vec![text("Peak Hour Factor"), num(0.9), num(0.8), num(0.85), num(0.7)],
        ]
    }

    #[test]
    fn directions_carry_forward_across_columns() {
        let breakdown = parse_volume_grid(&SheetGrid::new(volume_rows())).unwrap();

        assert_eq!(breakdown.directions.len(), 2);
        assert_eq!(breakdown.directions[0].direction, Direction::Northbound);
        assert_eq!(breakdown.directions[0].movements.len(), 2);
        assert_eq!(breakdown.directions[1].direction, Direction::Southbound);
        assert_eq!(breakdown.directions[1].movements.len(), 1);
    }

    #[test]
    fn total_columns_are_skipped() {
        let breakdown = parse_volume_grid(&SheetGrid::new(volume_rows())).unwrap();

        let northbound = &breakdown.directions[0];
        assert_eq!(northbound.movements[0].movement, Movement::Left);
        assert_eq!(northbound.movements[1].movement, Movement::Right);
    }

    #[test]
    fn unknown_movement_labels_resolve_to_thru() {
        let breakdown = parse_volume_grid(&SheetGrid::new(volume_rows())).unwrap();

        assert_eq!(
            breakdown.directions[1].movements[0].movement,
            Movement::Thru
        );
    }

    #[test]
    fn only_known_vehicle_classes_survive() {
        let breakdown = parse_volume_grid(&SheetGrid::new(volume_rows())).unwrap();

        let left = &breakdown.directions[0].movements[0];
        assert_eq!(
            left.counts,
            vec![(VehicleClass::Cars, 8), (VehicleClass::Buses, 2)]
        );
    }

    #[test]
    fn blank_counts_are_omitted_and_zero_is_kept() {
        let breakdown = parse_volume_grid(&SheetGrid::new(volume_rows())).unwrap();

        let right = &breakdown.directions[0].movements[1];
        assert_eq!(right.counts, vec![(VehicleClass::Cars, 12)]);

        let thru = &breakdown.directions[1].movements[0];
        assert_eq!(
            thru.counts,
            vec![(VehicleClass::Cars, 0), (VehicleClass::Buses, 9)]
        );
    }

    #[test]
    fn movement_columns_before_any_direction_are_ignored() {
        let mut rows = volume_rows();
        rows[0][1] = blank();
        rows[0][4] = blank();
        let breakdown = parse_volume_grid(&SheetGrid::new(rows)).unwrap();

        assert!(breakdown.directions.is_empty());
    }

    #[test]
    fn direction_with_no_movement_columns_is_preserved() {
        let rows = vec![
            vec![text("Direction"), text("Eastbound")],
            vec![text("Start Time"), text("App Total")],
            vec![text("Grand Total"), num(5.0)],
        ];
        let breakdown = parse_volume_grid(&SheetGrid::new(rows)).unwrap();

        assert_eq!(breakdown.directions.len(), 1);
        assert!(breakdown.directions[0].movements.is_empty());
    }

    #[test]
    fn missing_anchor_is_reported_by_name() {
        let mut rows = volume_rows();
        rows.remove(3);
        rows.remove(3);
        rows.remove(3);
        rows.remove(3);

        assert!(matches!(
            parse_volume_grid(&SheetGrid::new(rows)),
            Err(IngestError::AnchorNotFound("Grand Total"))
        ));
    }
}
