//! `runwatch describe`: Print the status sentence for a planned action.

use runwatch_core::PlannedAction;
use runwatch_gateway::describe_action;

pub fn run(action: Option<String>, arg: Option<String>) {
    let planned = PlannedAction {
        action: action.map(Into::into),
        arg,
    };
    println!("{}", describe_action(&planned));
}
