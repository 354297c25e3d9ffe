use crate::ArrayList;
use core::marker::PhantomData;
use serde_core::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
};

impl<T: Serialize> Serialize for ArrayList<T> {
    /// Serialize an `ArrayList` as a sequence of its elements, front to back.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ArrayList<T> {
    /// Deserialize an `ArrayList` from a sequence, appending each element in order.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArrayListVisitor<T> {
            _marker: PhantomData<T>,
        }

        impl<'de, T: Deserialize<'de>> Visitor<'de> for ArrayListVisitor<T> {
            type Value = ArrayList<T>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut list = ArrayList::new();
                while let Some(element) = seq.next_element()? {
                    list.add_back(element);
                }
                Ok(list)
            }
        }

        deserializer.deserialize_seq(ArrayListVisitor {
            _marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{ArrayList, arraylist};
    use alloc::string::String;

    #[test]
    fn arraylist_json() {
        let list = arraylist![1, 2, 3];
        let s = serde_json::to_string(&list).unwrap();
        assert_eq!(s, "[1,2,3]");
        let r: ArrayList<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(r, [1, 2, 3]);
    }

    #[test]
    fn empty_list_is_an_empty_sequence() {
        // Only `Display` renders an empty list as `null`.
        let list: ArrayList<i32> = ArrayList::new();
        let s = serde_json::to_string(&list).unwrap();
        assert_eq!(s, "[]");
        let r: ArrayList<i32> = serde_json::from_str(&s).unwrap();
        assert!(r.is_empty());
    }

    #[test]
    fn long_sequence_grows() {
        let json = "[0,1,2,3,4,5,6,7,8,9,10,11,12]";
        let r: ArrayList<u8> = serde_json::from_str(json).unwrap();
        assert_eq!(r.size(), 13);
        assert_eq!(r.get(12), Ok(&12));
    }

    #[test]
    fn rejects_non_sequence() {
        let r: Result<ArrayList<String>, _> = serde_json::from_str("{\"a\":1}");
        assert!(r.is_err());
    }
}
