use crate::err::RqErr;
use itertools::Itertools;
use rseq::{Integer, Sequence, of, range};
use std::io;
use std::io::BufRead;
use std::iter::Peekable;

mod err;

/// 演示用流水线：数据源与各个操作都装箱为同一种序列能力，逐个包裹成链后单遍驱动。
type Pipe = Box<dyn Sequence<Item = String>>;

const HELP: &str = "\
Usage: rq [-h] [-v] [<input>] [<op>]...

Input:
    :in             从标准输入逐行读取，未指定输入时的默认输入。
    :of <v>...      使用直接字面值作为输入，至少指定一个。
    :gen <from> <to> 生成[from, to)范围内的整数作为输入。

Op:
    :len            映射为字符数。
    :words          按空白把每个值拆分为多个值。
    :uniq           去重，保留首次出现的值。
    :limit <count>  保留前N个值。
    :skip <count>   丢弃前N个值。
    :peek           打印每个经过的值到标准输出。
    :count          统计值数量，产出单个计数结果。

Config:
    -h              打印帮助。
    -v              打印解析后的流水线信息。
";

fn main() {
    if let Err(e) = run() {
        e.termination();
    }
}

fn run() -> Result<(), RqErr> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        print!("{}", HELP);
        return Ok(());
    }
    let (input, ops) = parse(args)?;
    if configs.contains(&Config::Verbose) {
        println!("Input:");
        println!("    {:?}", input);
        println!("Op:");
        println!("{}", ops.iter().map(|op| format!("    {:?}", op)).join("\n"));
    }
    let mut pipe = input.pipe();
    for op in ops {
        pipe = op.wrap(pipe);
    }
    pipe.for_each(|item| println!("{item}"));
    Ok(())
}

#[derive(Debug, Eq, PartialEq)]
enum Config {
    /// 帮助 `-h`
    Help,
    /// 打印流水线信息 `-v`
    Verbose,
}

fn parse_configs<I: Iterator<Item = String>>(args: &mut Peekable<I>) -> Vec<Config> {
    let mut configs = Vec::new();
    while let Some(arg) = args.peek() {
        match arg.as_str() {
            "-h" => configs.push(Config::Help),
            "-v" => configs.push(Config::Verbose),
            _ => break,
        }
        args.next();
    }
    configs
}

#[derive(Debug, Eq, PartialEq)]
enum Input {
    /// :in     从标准输入逐行读取
    StdIn,
    /// :of     使用直接字面值作为输入
    Of { values: Vec<String> },
    /// :gen    生成`[start, end)`范围内的整数作为输入
    Gen { start: Integer, end: Integer },
}

impl Input {
    fn pipe(self) -> Pipe {
        match self {
            Input::StdIn => {
                Box::new(of(io::stdin().lock().lines().take_while(Result::is_ok).map(|line| line.unwrap())))
            }
            Input::Of { values } => Box::new(of(values)),
            Input::Gen { start, end } => Box::new(range(start, end).map(|v| v.to_string())),
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
enum Op {
    /// :len    映射为字符数
    Len,
    /// :words  按空白把每个值拆分为多个值
    Words,
    /// :uniq   去重，保留首次出现的值
    Uniq,
    /// :limit  保留前N个值
    Limit { count: usize },
    /// :skip   丢弃前N个值
    Skip { count: usize },
    /// :peek   打印每个经过的值到标准输出
    Peek,
    /// :count  统计值数量，产出单个计数结果
    Count,
}

impl Op {
    fn wrap(self, mut pipe: Pipe) -> Pipe {
        match self {
            Op::Len => Box::new(pipe.map(|item| item.chars().count().to_string())),
            Op::Words => {
                Box::new(pipe.flat_map(|item| of(item.split_whitespace().map(str::to_string).collect::<Vec<_>>())))
            }
            Op::Uniq => Box::new(pipe.distinct()),
            Op::Limit { count } => Box::new(pipe.limit(count)),
            Op::Skip { count } => Box::new(pipe.skip(count)),
            Op::Peek => Box::new(pipe.peek(|item| println!("{item}"))),
            Op::Count => Box::new(of([pipe.count().to_string()])),
        }
    }
}

fn parse<I: Iterator<Item = String>>(mut args: Peekable<I>) -> Result<(Input, Vec<Op>), RqErr> {
    let mut input = None;
    let mut ops = Vec::new();
    while let Some(token) = args.next() {
        match token.as_str() {
            ":in" => set_input(&mut input, Input::StdIn, &token)?,
            ":of" => {
                let values = collect_values(&mut args);
                if values.is_empty() {
                    Err(RqErr::ArgNotEnough { cmd: ":of", arg: "value" })?
                }
                set_input(&mut input, Input::Of { values }, &token)?
            }
            ":gen" => {
                let start = parse_arg(":gen", "start", &mut args)?;
                let end = parse_arg(":gen", "end", &mut args)?;
                set_input(&mut input, Input::Gen { start, end }, &token)?
            }
            ":len" => ops.push(Op::Len),
            ":words" => ops.push(Op::Words),
            ":uniq" => ops.push(Op::Uniq),
            ":limit" => ops.push(Op::Limit { count: parse_arg(":limit", "count", &mut args)? }),
            ":skip" => ops.push(Op::Skip { count: parse_arg(":skip", "count", &mut args)? }),
            ":peek" => ops.push(Op::Peek),
            ":count" => ops.push(Op::Count),
            _ => Err(RqErr::UnknownToken(token))?,
        }
    }
    Ok((input.unwrap_or(Input::StdIn), ops))
}

fn set_input(input: &mut Option<Input>, parsed: Input, token: &str) -> Result<(), RqErr> {
    if input.is_some() {
        Err(RqErr::DuplicatedInput(token.to_owned()))?
    }
    *input = Some(parsed);
    Ok(())
}

fn collect_values<I: Iterator<Item = String>>(args: &mut Peekable<I>) -> Vec<String> {
    let mut values = Vec::new();
    while let Some(arg) = args.peek() {
        if arg.starts_with(':') || arg.starts_with('-') {
            break;
        }
        values.push(args.next().unwrap());
    }
    values
}

fn parse_arg<T, I>(cmd: &'static str, arg: &'static str, args: &mut Peekable<I>) -> Result<T, RqErr>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    I: Iterator<Item = String>,
{
    match args.next() {
        Some(value) => value
            .parse()
            .map_err(|err: T::Err| RqErr::ArgParseErr { cmd, arg, arg_value: value, error: err.to_string() }),
        None => Err(RqErr::MissingArg { cmd, arg }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_tokens(tokens: &[&str]) -> Result<(Input, Vec<Op>), RqErr> {
        parse(tokens.iter().map(|s| s.to_string()).peekable())
    }

    #[test]
    fn test_parse_defaults_to_stdin() {
        let (input, ops) = parse_tokens(&[]).unwrap();
        assert_eq!(input, Input::StdIn);
        assert!(ops.is_empty());
    }

    #[test]
    fn test_parse_of_with_ops() {
        let (input, ops) = parse_tokens(&[":of", "a", "b", ":uniq", ":limit", "3"]).unwrap();
        assert_eq!(input, Input::Of { values: vec!["a".to_string(), "b".to_string()] });
        assert_eq!(ops, vec![Op::Uniq, Op::Limit { count: 3 }]);
    }

    #[test]
    fn test_parse_gen() {
        let (input, ops) = parse_tokens(&[":gen", "-3", "7", ":count"]).unwrap();
        assert_eq!(input, Input::Gen { start: -3, end: 7 });
        assert_eq!(ops, vec![Op::Count]);
    }

    #[test]
    fn test_parse_unknown_token() {
        assert_eq!(parse_tokens(&[":nope"]), Err(RqErr::UnknownToken(":nope".to_string())));
    }

    #[test]
    fn test_parse_duplicated_input() {
        assert_eq!(parse_tokens(&[":in", ":gen", "0", "3"]), Err(RqErr::DuplicatedInput(":gen".to_string())));
    }

    #[test]
    fn test_parse_of_without_values() {
        assert_eq!(parse_tokens(&[":of", ":uniq"]), Err(RqErr::ArgNotEnough { cmd: ":of", arg: "value" }));
    }

    #[test]
    fn test_parse_bad_count() {
        assert!(matches!(parse_tokens(&[":limit", "x"]), Err(RqErr::ArgParseErr { cmd: ":limit", .. })));
        assert_eq!(parse_tokens(&[":skip"]), Err(RqErr::MissingArg { cmd: ":skip", arg: "count" }));
    }

    #[test]
    fn test_wrap_chain_end_to_end() {
        let values = ["isel ola", "isel", "ola", "-super babel"].map(str::to_string).to_vec();
        let mut pipe = Input::Of { values }.pipe();
        for op in [Op::Words, Op::Uniq, Op::Len, Op::Limit { count: 3 }] {
            pipe = op.wrap(pipe);
        }
        assert_eq!(pipe.to_vec(), vec!["4", "3", "6"]);
    }
}
