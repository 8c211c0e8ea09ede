use intmul_core::hex::is_hex_str;
use intmul_core::model::{OperandPair, Partials, Quadrant};
use intmul_input::strip_newline;

use crate::error::WorkerError;
use crate::spawner::{Spawner, UnitHandle};

/// Delegate four half-products to four fresh units and collect their results.
///
/// `tasks` are in [`Quadrant::ALL`] order and each result lands in the slot of
/// the task that produced it. All four units run concurrently; this returns only
/// after every started unit has been reaped, and any unit failure fails the
/// whole dispatch.
pub fn run_four<S: Spawner + ?Sized>(
    spawner: &S,
    tasks: [OperandPair; 4],
) -> Result<Partials, WorkerError> {
    let mut units: Vec<(Quadrant, UnitHandle)> = Vec::with_capacity(Quadrant::ALL.len());

    for (quadrant, task) in Quadrant::ALL.into_iter().zip(tasks) {
        let mut unit = match spawner.spawn() {
            Ok(unit) => unit,
            Err(e) => {
                abandon(units);
                return Err(WorkerError::channel(format!("{quadrant} unit: spawn"), e));
            }
        };
        log::trace!("{quadrant} <- {} x {}", task.a(), task.b());

        let sent = unit.send(&task);
        units.push((quadrant, unit));
        if let Err(e) = sent {
            abandon(units);
            return Err(WorkerError::channel(format!("{quadrant} unit: send operands"), e));
        }
    }

    let mut slots: [Option<Result<String, WorkerError>>; 4] = Default::default();
    for (quadrant, unit) in &mut units {
        slots[quadrant.index()] = Some(read_result(*quadrant, unit));
    }

    // Exit status takes precedence over read errors: it explains them.
    let mut first_err = None;
    for (quadrant, unit) in units {
        if let Err(reason) = unit.wait() {
            log::error!("{quadrant} unit failed: {reason}");
            first_err.get_or_insert(WorkerError::child(quadrant, reason));
        }
    }
    if let Some(e) = first_err {
        return Err(e);
    }

    let mut results: [String; 4] = Default::default();
    for quadrant in Quadrant::ALL {
        let slot = slots[quadrant.index()]
            .take()
            .unwrap_or_else(|| Err(WorkerError::child(quadrant, "no result collected")));
        results[quadrant.index()] = slot?;
    }

    Ok(Partials::new(results))
}

fn read_result(quadrant: Quadrant, unit: &mut UnitHandle) -> Result<String, WorkerError> {
    let line = unit
        .receive()
        .map_err(|e| WorkerError::channel(format!("{quadrant} unit: read result"), e))?
        .ok_or_else(|| WorkerError::child(quadrant, "channel closed without a result"))?;

    let digits = strip_newline(&line);
    if !is_hex_str(digits) {
        return Err(WorkerError::child(
            quadrant,
            format!("malformed result line {digits:?}"),
        ));
    }
    log::trace!("{quadrant} -> {digits}");
    Ok(digits.to_string())
}

/// Close and reap units after an early abort. Their own failures are expected.
fn abandon(units: Vec<(Quadrant, UnitHandle)>) {
    for (quadrant, unit) in units {
        if let Err(reason) = unit.wait() {
            log::debug!("abandoned {quadrant} unit: {reason}");
        }
    }
}
