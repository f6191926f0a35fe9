use mealy_vend::core::MachineState;
use mealy_vend::machine::{Input, Output, VendingMachine};

/// Feed `inputs` one by one and compare every output and resulting state.
pub fn run_inputs<II, IO, IS>(
    machine: &mut VendingMachine,
    inputs: II,
    exp_outputs: IO,
    exp_states: IS,
) where
    II: IntoIterator<Item = Input>,
    IO: IntoIterator<Item = Output>,
    IS: IntoIterator<Item = MachineState>,
{
    let (states, outputs): (Vec<_>, Vec<_>) = inputs
        .into_iter()
        .map(|input| {
            let output = machine.process_input(input);
            (machine.state(), output)
        })
        .unzip();

    assert_eq!(states, exp_states.into_iter().collect::<Vec<_>>());
    assert_eq!(outputs, exp_outputs.into_iter().collect::<Vec<_>>());
}

/// The last output of a sequence, or `None` when there were no inputs.
pub fn last_output<I>(machine: &mut VendingMachine, inputs: I) -> Option<Output>
where
    I: IntoIterator<Item = Input>,
{
    inputs
        .into_iter()
        .map(|input| machine.process_input(input))
        .last()
}
