use ndarray::array;
use zeroplusplus::ZeroParams;

use linfa::dataset::DatasetBase;
use linfa::traits::{Fit, Predict};

fn main() -> zeroplusplus::Result<()> {
    env_logger::builder().format_timestamp(None).init();

    let data = array![
        [1.0, 0.0, 1.0, 0.0],
        [1.0, 0.0, 1.0, 0.0],
        [1.0, 0.0, 0.0, 1.0],
        [0.0, 1.0, 1.0, 0.0],
        [1.0, 0.0, 1.0, 0.0],
        [1.0, 0.0, 0.0, 1.0],
        [1.0, 1.0, 1.0, 1.0],  // anomaly
        [0.0, 0.0, 0.0, 0.0]   // anomaly
    ];

    let dataset = DatasetBase::new(data.clone(), ());
    let model = ZeroParams::from_seed(50, 4, 3).fit(&dataset)?;
    let preds = model.predict(&data)?;

    println!("{:?}", preds);
    println!("{:?}", model.raw_scores(&data)?);
    Ok(())
}
