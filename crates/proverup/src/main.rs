use clap::Parser;
use log::trace;
use proverup::{
    cli::{Args, Output},
    init_logger, run,
};

fn main() {
    let args = Args::parse();
    let output = args.output;

    init_logger();

    trace!("start");
    let res = run(&args);
    let code = match &res {
        Ok(ret) => ret.exit_code(),
        Err(e) => e.exit_code(),
    };

    match output {
        Output::Text => match res {
            Ok(ret) => println!("{ret}"),
            Err(e) => eprintln!("error: {e}"),
        },
        Output::Json => {
            let res = res.map_err(|e| format!("{e:}"));
            println!("{}", serde_json::to_string(&res).unwrap())
        }
    }

    trace!("done");
    std::process::exit(code)
}
