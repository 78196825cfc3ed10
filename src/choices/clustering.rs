use crate::choice;
use crate::choices::*;

choice!(Algorithm,
    Hierarchical => "Hierarchical - Merge the closest neighbouring clusters until the target count remains",
    GreedySeed => "Greedy Seed - Spread seed clusters far apart, then assign the closest points first",
    Both => "Both - Run both strategies on the same sample for comparison"
);

choice!(ScatterOutput,
    Save => "Save - Render each result to a scatter plot image",
    Skip => "Skip - Print the text reports only"
);
