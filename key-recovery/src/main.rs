//! Challenge driver: two RSA moduli share one public exponent; recover the
//! flag from whichever ciphertext gives in first.

use num_bigint::BigUint;

const E: &str = "86905291018330218127760596324522274547253465551209634052618098249596388694529";

const N1: &str = "112187114035595515717020336420063560192608507634951355884730277020103272516595827630685773552014888608894587055283796519554267693654102295681730016199369580577243573496236556117934113361938190726830349853086562389955289707685145472794173966128519654167325961312446648312096211985486925702789773780669802574893";

const N2: &str = "95727255683184071257205119413595957528984743590073248708202176413951084648626277198841459757379712896901385049813671642628441940941434989886894512089336243796745883128585743868974053010151180059532129088434348142499209024860189145032192068409977856355513219728891104598071910465809354419035148873624856313067";

const C1: &str = "71281698683006229705169274763783817580572445422844810406739630520060179171191882439102256990860101502686218994669784245358102850927955191225903171777969259480990566718683951421349181856119965365618782630111357309280954558872160237158905739584091706635219142133906953305905313538806862536551652537126291478865";

const C2: &str = "7333744583943012697651917897083326988621572932105018877567461023651527927346658805965099102481100945100738540533077677296823678241143375320240933128613487693799458418017975152399878829426141218077564669468040331339428477336144493624090728897185260894290517440392720900787100373142671471448913212103518035775";

fn decimal(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 10).expect("hardcoded decimal constant")
}

fn looks_like_flag(bytes: &[u8]) -> bool {
    bytes.starts_with(b"flag{") && bytes.ends_with(b"}")
}

fn main() {
    env_logger::init();
    let mut rng = rand::thread_rng();

    let e = decimal(E);
    println!("e bits: {}", e.bits());

    let challenges = [("N1", N1, C1), ("N2", N2, C2)];
    for (tag, n_str, c_str) in challenges {
        let n = decimal(n_str);
        let c = decimal(c_str);
        println!("{} bits: {}", tag, n.bits());
        println!("Trying to recover under {}...", tag);

        match key_recovery::recover(&e, &n, &c, &mut rng) {
            Ok(recovered) => {
                println!("  via {}", recovered.attack);
                if looks_like_flag(&recovered.bytes) {
                    println!("{} flag = {}", tag, String::from_utf8_lossy(&recovered.bytes));
                    return;
                }
                println!("  decrypted to {} bytes, not flag-shaped", recovered.bytes.len());
            }
            Err(err) => println!("  {}", err),
        }
    }

    println!("Failed to recover the flag with the implemented attacks.");
}
