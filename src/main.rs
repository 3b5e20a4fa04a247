use std::{cell::Cell, env, process};

use shortopt::{parse_options, OptionList};

fn print_usage() {
    println!("usage: shortopt [-n] [-u] [-h] [text...]");
    println!("  -n   do not print the trailing newline");
    println!("  -u   print the text in uppercase");
    println!("  -h   show this help and stop option scanning");
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(|s| s.as_str()).collect();

    let newline = Cell::new(true);
    let upper = Cell::new(false);
    let help = Cell::new(false);

    let mut opts = OptionList::new();
    opts.add('n', || {
        newline.set(false);
        true
    });
    opts.add('u', || {
        upper.set(true);
        true
    });
    opts.add('h', || {
        help.set(true);
        false
    });

    let rest = match parse_options(&args, &mut opts) {
        Ok(rest) => rest,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if help.get() {
        print_usage();
        return;
    }

    let mut text = rest.join(" ");
    if upper.get() {
        text = text.to_uppercase();
    }
    if newline.get() {
        println!("{}", text);
    } else {
        print!("{}", text);
    }
}
