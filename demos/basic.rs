//! Basic usage of the recurrent option types
//!
//! Builds options for each cell kind, plans their parameters the way a
//! layer constructor would, and applies the plain-RNN nonlinearity to a
//! tensor.
//!
//! Run with `RUST_LOG=debug` to see the planner's log output.

use burn::backend::NdArray;
use burn::tensor::Tensor;
use recurrent_options::prelude::*;

fn describe(options: &dyn RecurrentOptions) -> Result<(), OptionsError> {
    let layout = ParameterLayout::from_options(options)?;

    println!("{layout}");
    println!("  Input size:  {}", options.input_size());
    println!("  Hidden size: {}", options.hidden_size());
    println!("  Layers:      {}", options.num_layers());
    println!("  Directions:  {}", layout.num_directions());
    println!("  Input shape  [batch=4, seq=10]: {:?}", layout.input_shape(4, 10));
    println!("  Output shape [batch=4, seq=10]: {:?}", layout.output_shape(4, 10));
    println!("  Hidden state [batch=4]: {:?}", layout.hidden_state_shape(4));
    if let Some(shape) = layout.cell_state_shape(4) {
        println!("  Cell state   [batch=4]: {:?}", shape);
    }
    for spec in layout.parameters() {
        println!("    {:<24} {:?}", spec.name, spec.shape);
    }
    println!("  Total parameters: {}", layout.parameter_count());
    println!();

    Ok(())
}

fn main() -> Result<(), OptionsError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Recurrent Options Example ===\n");

    // Example 1: Plain RNN with ReLU
    let rnn = PlainRNNOptions::new(10, 20)
        .with_nonlinearity(Nonlinearity::ReLU)
        .with_num_layers(2);
    describe(&rnn)?;

    // Example 2: Stacked bidirectional LSTM, batch-first
    let lstm = LSTMOptions::new(8, 16)
        .with_num_layers(3)
        .with_bidirectional(true)
        .with_batch_first(true)
        .with_dropout(0.2);
    describe(&lstm)?;

    // Example 3: GRU configured through the mode-tagged base
    let base = RecurrentLayerOptionsBase::new(CellKind::Gru, 12, 24).with_bias(false);
    let gru = GRUOptions::try_from(base)?;
    describe(&gru)?;

    // Example 4: Options serialize to JSON through Config
    println!("=== LSTM options as JSON ===");
    println!("{}", lstm);
    println!();

    // Example 5: The nonlinearity drives the plain-RNN activation
    type Backend = NdArray<f32>;
    let device = Default::default();
    let pre_activation = Tensor::<Backend, 2>::random(
        [4, 20],
        burn::tensor::Distribution::Uniform(-1.0, 1.0),
        &device,
    );
    let hidden = pre_activation.activate(rnn.nonlinearity);
    println!("=== Activation ===");
    println!("  Hidden shape: {:?}", hidden.dims());

    // A warning is logged here: dropout never applies to a single layer
    let _ = ParameterLayout::from_options(&GRUOptions::new(4, 4).with_dropout(0.5))?;

    Ok(())
}
